//! Persistence error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Failure to write a record file, with location tracking.
///
/// Only writes surface errors. Unreadable or corrupt files on the read path
/// are replaced by defaults.
#[derive(Debug, Clone, Display, Error)]
#[display("Record error: {} at {}:{}", message, file, line)]
pub struct RecordError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl RecordError {
    /// Creates a new record error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for RecordError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for RecordError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}

impl From<tempfile::PersistError> for RecordError {
    #[track_caller]
    fn from(err: tempfile::PersistError) -> Self {
        Self::new(format!("Failed to replace {}: {}", err.file.path().display(), err.error))
    }
}
