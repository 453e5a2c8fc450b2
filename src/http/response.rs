//! HTTP response writing module
//!
//! Writes the raw status line, headers, and body for the two response
//! kinds this server produces. Status lines carry a trailing space
//! before the CRLF.

use std::io;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Fixed body served for missing resources
pub const NOT_FOUND_BODY: &str = "<html><body><h1>404 Not Found</h1></body></html>";

/// Write a 200 response carrying the file bytes
///
/// Every content type is sent with a `;charset=utf-8` suffix,
/// including binary ones.
pub async fn write_200_response<W>(
    writer: &mut W,
    content_type: &str,
    body: &[u8],
) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let header = format!(
        "HTTP/1.1 200 OK \r\nContent-Type: {content_type};charset=utf-8\r\nContent-Length: {}\r\n\r\n",
        body.len()
    );
    writer.write_all(header.as_bytes()).await?;
    writer.write_all(body).await?;
    writer.flush().await
}

/// Write the fixed 404 response
pub async fn write_404_response<W>(writer: &mut W) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let header = format!(
        "HTTP/1.1 404 Not Found \r\nContent-Type: text/html;charset=utf-8\r\nContent-Length: {}\r\n\r\n",
        NOT_FOUND_BODY.len()
    );
    writer.write_all(header.as_bytes()).await?;
    writer.write_all(NOT_FOUND_BODY.as_bytes()).await?;
    writer.flush().await
}
