//! Batch driver: clean every message file in a source directory.

use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use paxlst_core::clean;
use paxlst_ingest::{IngestError, list_message_files, read_payload, write_payload};
use paxlst_model::CleanError;

/// How the batch reacts to a file that fails to clean.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailureMode {
    /// Stop at the first failure; remaining files stay untouched.
    ///
    /// A single malformed file aborts the whole drop rather than shipping
    /// a partially cleaned batch.
    #[default]
    Halt,
    /// Record the failure and continue with the remaining files.
    Continue,
}

/// Record of one successfully cleaned file.
#[derive(Debug)]
pub struct CleanedFile {
    /// Source message path.
    pub source: PathBuf,
    /// Cleaned output path.
    pub target: PathBuf,
    /// Number of segments in the cleaned output.
    pub segments: usize,
}

/// Record of one file that failed to clean.
#[derive(Debug)]
pub struct BatchFailure {
    /// Source message path.
    pub source: PathBuf,
    /// Why the file was rejected.
    pub error: CleanError,
}

/// Result of a batch run.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Files cleaned and written, in processing order.
    pub cleaned: Vec<CleanedFile>,
    /// Files that failed to clean.
    pub failures: Vec<BatchFailure>,
    /// True when the batch stopped before the end of the file list.
    pub halted: bool,
}

impl BatchOutcome {
    /// True when at least one file failed to clean.
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Clean every file in `source` into `target` under the same file name.
///
/// Files are processed in sorted-name order so batch runs are
/// reproducible. Both directories must exist. With [`FailureMode::Halt`]
/// the first failing file stops the batch; files after it are never
/// touched.
///
/// # Errors
///
/// Returns an [`IngestError`] when a directory is missing or a file
/// cannot be read or written; these abort the batch in either mode.
pub fn clean_dir(
    source: &Path,
    target: &Path,
    mode: FailureMode,
) -> Result<BatchOutcome, IngestError> {
    if !target.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: target.to_path_buf(),
        });
    }

    let files = list_message_files(source)?;
    info!(
        source = %source.display(),
        target = %target.display(),
        file_count = files.len(),
        "batch started"
    );

    let mut outcome = BatchOutcome::default();
    for path in files {
        let payload = read_payload(&path)?;
        match clean(&payload) {
            Ok(cleaned) => {
                let Some(name) = path.file_name() else {
                    continue;
                };
                let target_path = target.join(name);
                write_payload(&target_path, &cleaned)?;
                let segments = cleaned.lines().count();
                info!(
                    source = %path.display(),
                    target = %target_path.display(),
                    segments,
                    "cleaned"
                );
                outcome.cleaned.push(CleanedFile {
                    source: path,
                    target: target_path,
                    segments,
                });
            }
            Err(clean_error) => {
                warn!(source = %path.display(), error = %clean_error, "clean failed");
                outcome.failures.push(BatchFailure {
                    source: path,
                    error: clean_error,
                });
                if mode == FailureMode::Halt {
                    outcome.halted = true;
                    error!(
                        cleaned = outcome.cleaned.len(),
                        "batch halted on first failure"
                    );
                    break;
                }
            }
        }
    }

    Ok(outcome)
}
