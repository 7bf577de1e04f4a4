//! Error types for the booking finance core

use thiserror::Error;

/// Finance calculation errors
///
/// Every operation fails fast on malformed input; `Computation` wraps an
/// unexpected failure inside a multi-step derivation (date arithmetic,
/// check-in payload assembly). Callers should treat `Computation` as
/// retryable after correcting their input, not as a systemic fault.
#[derive(Debug, Error)]
pub enum FinanceError {
    #[error("Invalid argument `{field}`: {reason}")]
    InvalidArgument { field: &'static str, reason: String },

    #[error("Computation failed: {0}")]
    Computation(String),
}

impl FinanceError {
    /// Create an invalid-argument error naming the offending field
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }

    /// Which argument was rejected, if this is an `InvalidArgument`
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { field, .. } => Some(field),
            Self::Computation(_) => None,
        }
    }
}

/// Type alias for Result with FinanceError
pub type FinanceResult<T> = Result<T, FinanceError>;
