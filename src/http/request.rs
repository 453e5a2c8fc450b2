//! HTTP request reading module
//!
//! Reads one request line plus headers from a connection. Parsing is
//! deliberately loose: the request line is split on single spaces and
//! only the method and path tokens are used; header lines are read and
//! retained for diagnostics but otherwise ignored.

use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// One parsed HTTP request
#[derive(Debug)]
pub struct Request {
    /// Request method, kept for the access log
    pub method: String,
    /// Requested path, slash-prefixed
    pub path: String,
    /// Raw request text (request line + header lines)
    pub raw: String,
}

impl Request {
    /// Read one request from the stream
    ///
    /// Returns `Ok(None)` when the stream ends or the first line is
    /// empty; in that case nothing must be written back. A request
    /// line without a path token is an `InvalidData` error and headers
    /// are not read.
    pub async fn read<R>(reader: &mut R) -> io::Result<Option<Self>>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut line = String::new();
        if reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }

        let request_line = line.trim_end_matches(['\r', '\n']);
        if request_line.is_empty() {
            return Ok(None);
        }

        let (method, path) = parse_request_line(request_line)?;
        let mut raw = String::from(request_line);
        raw.push('\n');

        // Headers are read up to the blank line (or end of stream) and
        // kept only as diagnostic text.
        loop {
            line.clear();
            if reader.read_line(&mut line).await? == 0 {
                break;
            }
            let header = line.trim_end_matches(['\r', '\n']);
            if header.is_empty() {
                break;
            }
            raw.push_str(header);
            raw.push('\n');
        }

        Ok(Some(Self { method, path, raw }))
    }
}

/// Split the request line on single spaces into method and path
fn parse_request_line(line: &str) -> io::Result<(String, String)> {
    let mut tokens = line.split(' ');
    let method = tokens.next().unwrap_or_default().to_string();
    let path = tokens.next().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("request line has no path token: {line}"),
        )
    })?;
    Ok((method, path.to_string()))
}
