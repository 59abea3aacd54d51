//! Application layer errors.
//!
//! These errors represent failures in orchestration, not pattern logic.
//! Pattern-level errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while running demos or persisting their output.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A line could not be written to the console port.
    #[error("Failed to write demo output: {reason}")]
    ConsoleWrite { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Shared adapter state was poisoned.
    #[error("Adapter state lock poisoned")]
    StoreLockError,

    /// A menu selector could not be read as a number.
    #[error("Invalid selector '{input}', expected a number")]
    InvalidSelector { input: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConsoleWrite { .. } => vec![
                "Standard output may be closed".into(),
                "Try again without piping the output".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::StoreLockError => vec![
                "An earlier operation panicked while holding shared state".into(),
                "Restart the command".into(),
            ],
            Self::InvalidSelector { .. } => vec![
                "Please enter 2 or 1".into(),
                "Try: patternkit send --kind 1 --text hello".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConsoleWrite { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::InvalidSelector { .. } => ErrorCategory::Validation,
        }
    }
}
