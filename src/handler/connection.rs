//! Connection handler module
//!
//! One handler instance serves one accepted connection: read a single
//! request, resolve it against the static root, write a single
//! response, and return. Every error path ends in one log line; the
//! socket is closed by the caller dropping the stream.

use crate::config::Config;
use crate::handler::static_files;
use crate::http::{mime, response, rewrite, Request};
use crate::logger::{self, AccessLogEntry};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncWrite};

/// Per-connection request handler
pub struct ConnectionHandler {
    config: Arc<Config>,
    peer_addr: SocketAddr,
}

impl ConnectionHandler {
    pub fn new(config: Arc<Config>, peer_addr: SocketAddr) -> Self {
        Self { config, peer_addr }
    }

    /// Serve one request from the reader, writing the response to the
    /// writer
    ///
    /// Never returns an error: failures are logged and the connection
    /// is abandoned in whatever partial state the writer is in.
    pub async fn handle<R, W>(&self, mut reader: R, mut writer: W)
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        if let Err(e) = self.serve(&mut reader, &mut writer).await {
            logger::log_connection_error(&e);
        }
    }

    async fn serve<R, W>(&self, reader: &mut R, writer: &mut W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        // An absent or empty request line gets no response at all.
        let Some(request) = Request::read(reader).await? else {
            return Ok(());
        };

        let logging = &self.config.logging;
        if logging.access_log {
            logger::log_request_url(&request.path);
        }
        if logging.show_request {
            logger::log_request_text(&request.raw);
        }

        let resolved = rewrite::resolve_path(&request.path, &self.config.routes);
        if logging.access_log {
            logger::log_resolved_path(&resolved);
        }

        // The resolved path is appended to the static root as-is, with
        // no normalization: the root must not sit above anything
        // sensitive.
        let file_path = format!("{}{}", self.config.routes.static_root, resolved);

        let (status, body_bytes) = match static_files::load_file(&file_path).await? {
            Some(content) => {
                let content_type = mime::content_type_for(
                    &resolved,
                    &self.config.http.content_types,
                    &self.config.http.default_content_type,
                );
                response::write_200_response(writer, content_type, &content).await?;
                (200, content.len())
            }
            None => {
                response::write_404_response(writer).await?;
                (404, response::NOT_FOUND_BODY.len())
            }
        };

        if logging.access_log {
            let mut entry =
                AccessLogEntry::new(self.peer_addr.to_string(), request.method, request.path);
            entry.status = status;
            entry.body_bytes = body_bytes;
            logger::log_access(&entry);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HttpConfig, LoggingConfig, RoutesConfig, ServerConfig};
    use std::path::{Path, PathBuf};

    fn static_root(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "rust_fileserver_handler_{}_{name}",
            std::process::id()
        ));
        std::fs::create_dir_all(dir.join("login")).unwrap();
        std::fs::write(dir.join("index.html"), "<h1>Welcome</h1>").unwrap();
        std::fs::write(dir.join("style.css"), "body { margin: 0; }").unwrap();
        std::fs::write(dir.join("login").join("index.html"), "<h1>Login</h1>").unwrap();
        std::fs::write(dir.join("data.bin"), [0u8, 159, 146, 150]).unwrap();
        dir
    }

    fn test_config(root: &Path) -> Arc<Config> {
        Arc::new(Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                workers: None,
            },
            logging: LoggingConfig {
                access_log: false,
                ..LoggingConfig::default()
            },
            routes: RoutesConfig {
                static_root: root.to_str().unwrap().to_string(),
                ..RoutesConfig::default()
            },
            http: HttpConfig::default(),
        })
    }

    async fn run_handler(config: Arc<Config>, input: &[u8]) -> Vec<u8> {
        let handler = ConnectionHandler::new(config, "127.0.0.1:50000".parse().unwrap());
        let mut output = Vec::new();
        handler.handle(input, &mut output).await;
        output
    }

    fn split_response(raw: &[u8]) -> (String, Vec<u8>) {
        let pos = raw
            .windows(4)
            .position(|window| window == b"\r\n\r\n")
            .expect("response has no header terminator");
        (
            String::from_utf8(raw[..pos].to_vec()).unwrap(),
            raw[pos + 4..].to_vec(),
        )
    }

    #[tokio::test]
    async fn test_root_serves_index_html() {
        let root = static_root("root_index");
        let config = test_config(&root);
        let out = run_handler(config, b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n").await;

        let (head, body) = split_response(&out);
        assert!(head.starts_with("HTTP/1.1 200 OK \r\n"));
        assert!(head.contains("Content-Type: text/html;charset=utf-8"));
        assert!(head.contains(&format!("Content-Length: {}", body.len())));
        assert_eq!(body, b"<h1>Welcome</h1>");
    }

    #[tokio::test]
    async fn test_css_file_gets_css_content_type() {
        let root = static_root("css");
        let config = test_config(&root);
        let out = run_handler(config, b"GET /style.css HTTP/1.1\r\n\r\n").await;

        let (head, body) = split_response(&out);
        assert!(head.starts_with("HTTP/1.1 200 OK \r\n"));
        assert!(head.contains("Content-Type: text/css;charset=utf-8"));
        assert_eq!(body, b"body { margin: 0; }");
    }

    #[tokio::test]
    async fn test_index_page_rewrite_serves_same_file_as_direct_path() {
        let root = static_root("rewrite");
        let config = test_config(&root);

        let rewritten =
            run_handler(Arc::clone(&config), b"GET /login HTTP/1.1\r\n\r\n").await;
        let direct =
            run_handler(config, b"GET /login/index.html HTTP/1.1\r\n\r\n").await;

        assert_eq!(rewritten, direct);
        let (head, body) = split_response(&rewritten);
        assert!(head.starts_with("HTTP/1.1 200 OK \r\n"));
        assert_eq!(body, b"<h1>Login</h1>");
    }

    #[tokio::test]
    async fn test_missing_file_gets_404() {
        let root = static_root("missing");
        let config = test_config(&root);
        let out = run_handler(config, b"GET /missing.png HTTP/1.1\r\n\r\n").await;

        let (head, body) = split_response(&out);
        assert!(head.starts_with("HTTP/1.1 404 Not Found \r\n"));
        assert!(head.contains("Content-Type: text/html;charset=utf-8"));
        assert!(head.contains(&format!(
            "Content-Length: {}",
            response::NOT_FOUND_BODY.len()
        )));
        assert_eq!(body, response::NOT_FOUND_BODY.as_bytes());
    }

    #[tokio::test]
    async fn test_unmapped_suffix_gets_default_content_type() {
        let root = static_root("binary");
        let config = test_config(&root);
        let out = run_handler(config, b"GET /data.bin HTTP/1.1\r\n\r\n").await;

        let (head, body) = split_response(&out);
        assert!(head.contains("Content-Type: application/octet-stream;charset=utf-8"));
        assert_eq!(body, [0u8, 159, 146, 150]);
    }

    #[tokio::test]
    async fn test_one_token_request_line_writes_nothing() {
        let root = static_root("one_token");
        let config = test_config(&root);
        let out = run_handler(config, b"GET\r\n\r\n").await;
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_blank_first_line_writes_nothing() {
        let root = static_root("blank_line");
        let config = test_config(&root);
        let out = run_handler(config, b"\r\n").await;
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_immediate_eof_writes_nothing() {
        let root = static_root("eof");
        let config = test_config(&root);
        let out = run_handler(config, b"").await;
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_content_length_matches_file_bytes_exactly() {
        let root = static_root("content_length");
        let config = test_config(&root);
        let out = run_handler(config, b"GET /index.html HTTP/1.1\r\n\r\n").await;

        let (head, body) = split_response(&out);
        let content_length: usize = head
            .lines()
            .find_map(|line| line.strip_prefix("Content-Length: "))
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(content_length, body.len());
        assert_eq!(body, std::fs::read(root.join("index.html")).unwrap());
    }
}
