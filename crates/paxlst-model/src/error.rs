use thiserror::Error;

use crate::report::ValidationReport;

/// Failure taxonomy of the clean pipeline.
///
/// `Validation` is a normal rejection carrying the missing-tag lists; the
/// other variants mean the payload passed validation but its boundary
/// markers cannot be resolved.
#[derive(Debug, Error)]
pub enum CleanError {
    /// One or more mandatory segments are absent.
    #[error("missing mandatory segments: {}", .0.describe())]
    Validation(ValidationReport),
    /// The service characters block after `UNA` is shorter than mandated.
    #[error("truncated service string advice: expected {expected} service characters, found {found}")]
    TruncatedServiceAdvice { expected: usize, found: usize },
    /// A boundary marker could not be located.
    #[error("boundary marker not found: {marker}")]
    BoundaryNotFound { marker: String },
}

pub type Result<T> = std::result::Result<T, CleanError>;
