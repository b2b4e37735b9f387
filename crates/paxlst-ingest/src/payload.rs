//! Message payload reading and writing.

use std::path::Path;

use tracing::debug;

use crate::error::{IngestError, Result};

/// Read a whole message payload, tolerating non-UTF-8 noise.
///
/// Undecodable bytes become replacement characters; those are non-ASCII
/// and disappear during normalization.
pub fn read_payload(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let bytes = std::fs::read(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), byte_count = bytes.len(), "payload read");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write a cleaned payload to the target path.
pub fn write_payload(path: &Path, payload: &str) -> Result<()> {
    std::fs::write(path, payload).map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
