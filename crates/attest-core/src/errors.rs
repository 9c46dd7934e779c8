//! Cross-cutting error types for Attest.
//!
//! Crate-specific errors (`ClientError`, `AuthError`, `PrefsError`) live in
//! their own crates. The binary converges them through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Attest crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: i64 },

    /// A mutation was attempted on a record the backend treats as read-only.
    #[error("{entity_type} {id} is read-only")]
    ReadOnly { entity_type: String, id: i64 },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
