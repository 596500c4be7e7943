//! Cross-cutting error types for Tappr.
//!
//! This module defines the domain error taxonomy for the discovery flow.
//! Infrastructure errors (e.g., `DatabaseError`) are defined in their
//! respective crates and converge with these at the service layer.

use thiserror::Error;

/// Domain errors surfaced by discovery operations.
///
/// None of these are treated as process-fatal; they all propagate to the
/// caller and are rendered as a user-facing message or redirect.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An operation that needs a caller identity was invoked without one.
    #[error("User not authenticated")]
    AuthenticationRequired,

    /// Session lookup returned no result.
    #[error("Discovery session not found: {id}")]
    SessionNotFound { id: String },

    /// The session's expiry timestamp has passed.
    #[error("Discovery session has expired: {id}")]
    SessionExpired { id: String },

    /// The caller is neither party of a restricted session.
    #[error("Not authorized to view session: {id}")]
    NotAuthorized { id: String },

    /// Data failed validation (question bank integrity, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
