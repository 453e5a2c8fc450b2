//! Static file loading module
//!
//! Resolves request paths against the static root on disk.

use std::io;
use std::path::Path;
use tokio::fs;

/// Load a file's full contents
///
/// Returns `Ok(None)` when the path does not name a regular file (the
/// 404 branch); any failure to stat counts as missing, matching a
/// plain existence check. Read failures after the check propagate.
pub async fn load_file(path: &str) -> io::Result<Option<Vec<u8>>> {
    let path = Path::new(path);
    match fs::metadata(path).await {
        Ok(meta) if meta.is_file() => {}
        _ => return Ok(None),
    }

    let content = fs::read(path).await?;
    Ok(Some(content))
}
