//! Question bank error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Error loading or validating a question bank, with caller location.
#[derive(Debug, Clone, Display, Error)]
#[display("Question bank error: {} at {}:{}", message, file, line)]
pub struct BankError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BankError {
    /// Creates a new bank error with caller location tracking.
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
