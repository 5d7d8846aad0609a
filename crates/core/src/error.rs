//! Typed failures surfaced by every Cardify operation.
//!
//! None of these are retried or downgraded. A missing progress record is
//! never one of them: it reads as the implicit NEW record instead.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A deck, card or user id did not resolve.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// The entity exists but belongs to another user.
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// Missing or malformed input.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// An identity that must be unique is already taken.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// The caller could not be identified.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Stored data is inconsistent or an internal step failed.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        CoreError::ValidationFailed(errors.to_string())
    }
}
