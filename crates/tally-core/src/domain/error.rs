// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to pass across layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    /// A value of the wrong type was handed to a text operation.
    #[error("Expected {expected}, got {received}")]
    InvalidArgument {
        expected: &'static str,
        received: String,
    },

    /// Raw input bytes could not be decoded as UTF-8.
    #[error("Input is not valid UTF-8: {reason}")]
    InvalidEncoding { reason: String },

    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidArgument { expected, received } => vec![
                format!("Pass a {} value instead of {}", expected, received),
            ],
            Self::InvalidEncoding { .. } => vec![
                "Only UTF-8 encoded text can be processed".into(),
                "Convert the file first, e.g. iconv -t UTF-8 input.txt".into(),
            ],
            Self::InvalidProjectName { name, .. } => vec![
                format!("'{}' must be a valid Rust identifier", name),
                "Start with a letter or underscore".into(),
                "Use only ASCII letters, digits, and underscores".into(),
                "Examples: my_app, word_counter, app2".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument { .. }
            | Self::InvalidEncoding { .. }
            | Self::InvalidProjectName { .. } => ErrorCategory::Validation,
        }
    }
}

/// Every domain error is a validation failure of caller input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
}
