//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// The payload of the field variants is the user-facing message shown
/// under the offending form field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0}")]
    InvalidTitle(String),

    #[error("{0}")]
    InvalidFrequency(String),

    #[error("Invalid goal id: {0}")]
    InvalidGoalId(String),
}

impl DomainError {
    /// The message to display next to the field, if this is a field error
    pub fn field_message(&self) -> Option<&str> {
        match self {
            DomainError::InvalidTitle(msg) | DomainError::InvalidFrequency(msg) => Some(msg),
            DomainError::InvalidGoalId(_) => None,
        }
    }
}
