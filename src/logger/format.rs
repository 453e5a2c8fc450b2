//! Access log format module
//!
//! Renders access log entries in Common Log Format (CLF).

use chrono::Local;

/// Access log entry containing request/response information
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client address (ip:port)
    pub remote_addr: String,
    /// Request timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method from the request line
    pub method: String,
    /// Requested URI path
    pub path: String,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: usize,
}

impl AccessLogEntry {
    /// Create a new access log entry with the current timestamp
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            status: 200,
            body_bytes: 0,
        }
    }

    /// Common Log Format (CLF)
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    pub fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{} {} HTTP/1.1\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.path,
            self.status,
            self.body_bytes,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_format() {
        let mut entry = AccessLogEntry::new(
            "127.0.0.1:50000".to_string(),
            "GET".to_string(),
            "/style.css".to_string(),
        );
        entry.status = 200;
        entry.body_bytes = 120;

        let line = entry.format_common();
        assert!(line.starts_with("127.0.0.1:50000 - - ["));
        assert!(line.ends_with("\"GET /style.css HTTP/1.1\" 200 120"));
    }

    #[test]
    fn test_404_entry() {
        let mut entry = AccessLogEntry::new(
            "10.0.0.7:41234".to_string(),
            "GET".to_string(),
            "/missing.png".to_string(),
        );
        entry.status = 404;
        entry.body_bytes = 48;

        assert!(entry
            .format_common()
            .ends_with("\"GET /missing.png HTTP/1.1\" 404 48"));
    }
}
