use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while locating, reading, or writing message files.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
