//! Atomic file write operations.
//!
//! Temp files are created next to the target and renamed over it, so a
//! reader sees either the old content or the new content, never a mix.

use std::io;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write content to a file atomically using a temporary file.
///
/// The temp file is removed automatically if any step fails.
///
/// # Errors
///
/// Returns an `io::Error` if the path has no parent directory, or if
/// creating, writing or renaming the temp file fails.
pub async fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no parent directory"))?
        .to_path_buf();
    let target_path = path.to_path_buf();
    let content_owned = content.to_string();

    tokio::task::spawn_blocking(move || -> io::Result<()> {
        use std::io::Write;

        let mut temp_file = NamedTempFile::new_in(&parent)?;
        temp_file.write_all(content_owned.as_bytes())?;
        temp_file.as_file().sync_all()?;
        // Consumes the temp file, so it is not deleted on drop.
        temp_file.persist(&target_path)?;
        Ok(())
    })
    .await
    .map_err(io::Error::other)?
}
