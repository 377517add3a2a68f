//! Handling service error model.

use thiserror::Error;

/// Result type returned by handling services.
pub type HandlingResult<T> = Result<T, HandlingError>;

/// Outcome of a failed registration, as seen by callers of [`crate::HandlingService`].
///
/// The taxonomy is deliberately closed: either a referenced entity does not
/// exist, or something else went wrong. The message is what clients get to see.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandlingError {
    /// A referenced entity (e.g. the cargo) is unknown.
    #[error("{0}")]
    NotFound(String),

    /// Any other failure.
    #[error("{0}")]
    Other(String),
}

impl HandlingError {
    pub fn unknown_cargo() -> Self {
        Self::NotFound("unknown cargo".to_string())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_argument() -> Self {
        Self::Other("invalid argument".to_string())
    }

    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
