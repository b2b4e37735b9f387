//! Message file discovery.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IngestError, Result};

/// Lists all regular files in a directory, sorted by file name.
///
/// Only the top level is scanned; subdirectories are skipped. Message
/// drops carry no canonical extension, so every regular file is a
/// candidate.
pub fn list_message_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        files.push(path);
    }

    // Sorted iteration keeps batch runs reproducible
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!(dir = %dir.display(), file_count = files.len(), "message files listed");

    Ok(files)
}
