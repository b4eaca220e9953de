//! Domain error model.

use thiserror::Error;

/// Result type used across the boundary layers.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The cleaning functions themselves never fail; unparseable fields come back
/// as `None`. This type covers the checks made where raw records enter the
/// system (shape validation, batch limits).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a required field is missing).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A request exceeded a configured limit.
    #[error("limit exceeded: {0}")]
    LimitExceeded(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn limit_exceeded(msg: impl Into<String>) -> Self {
        Self::LimitExceeded(msg.into())
    }
}
