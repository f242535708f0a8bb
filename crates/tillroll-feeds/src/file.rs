//! Local file acquisition.

use std::path::Path;

use crate::FeedError;

/// Read a whole file and hand it over as lossy UTF-8 text.
pub async fn read(path: &Path) -> Result<String, FeedError> {
    let bytes = tokio::fs::read(path).await.map_err(|err| FeedError::Io {
        path: path.to_path_buf(),
        err,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read source file");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
