// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (demos re-run freely)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Required name missing for {entity}")]
    MissingName { entity: &'static str },

    #[error("Unknown {kind} '{value}'")]
    UnknownValue { kind: &'static str, value: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Journal has no entry at index {index} (entries: {len})")]
    EntryNotFound { index: usize, len: usize },

    #[error("No factory registered for drink '{drink}'")]
    UnknownDrink { drink: String },

    // ========================================================================
    // Deliberate contract violations
    // ========================================================================
    /// Raised by devices forced to implement operations they cannot perform.
    #[error("{device} does not implement '{operation}'")]
    NotImplemented {
        device: &'static str,
        operation: &'static str,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingName { entity } => vec![
                format!("Give the {} a non-empty name", entity),
                "Whitespace-only names are treated as missing".into(),
            ],
            Self::UnknownValue { kind, value } => vec![
                format!("'{}' is not a known {}", value, kind),
                "Values are matched case-insensitively".into(),
            ],
            Self::EntryNotFound { len, .. } => vec![
                format!("The journal currently holds {} entries", len),
                "Entry indexes start at 0".into(),
            ],
            Self::UnknownDrink { drink } => vec![
                format!("Register a factory for '{}' before ordering it", drink),
                "Try: patternkit drink tea".into(),
            ],
            Self::NotImplemented { device, .. } => vec![
                format!("{} only supports a subset of the machine interface", device),
                "Depend on the narrower Printer / Scanner traits instead".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingName { .. } | Self::UnknownValue { .. } => ErrorCategory::Validation,
            Self::EntryNotFound { .. } | Self::UnknownDrink { .. } => ErrorCategory::NotFound,
            Self::NotImplemented { .. } => ErrorCategory::Unsupported,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Unsupported,
}
