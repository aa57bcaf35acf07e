//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Constraint failures are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A document could not be read.
    #[error("Cannot read {location}: {reason}")]
    SourceUnavailable { location: String, reason: String },

    /// Raw text is not a well-formed document of the requested kind.
    #[error("Cannot decode {kind}: {reason}")]
    DecodeFailed { kind: String, reason: String },

    /// An entity could not be written out.
    #[error("Cannot encode {kind}: {reason}")]
    EncodeFailed { kind: String, reason: String },

    /// Store access failed (lock poisoned).
    #[error("Document store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SourceUnavailable { location, .. } => vec![
                format!("Failed to access: {location}"),
                "Check that the path exists and is readable".into(),
            ],
            Self::DecodeFailed { kind, .. } => vec![
                format!("The document is not a well-formed {kind}"),
                format!("Try: ocppkit sample {kind} to see the expected shape"),
            ],
            Self::StoreLockError => vec![
                "The document store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::EncodeFailed { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SourceUnavailable { .. } => ErrorCategory::NotFound,
            Self::DecodeFailed { .. } => ErrorCategory::Validation,
            Self::EncodeFailed { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
