//! Database and service error types for tappr-db.

use thiserror::Error;

use tappr_core::errors::CoreError;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (bad stored data, or a guarded status
    /// transition that found the row in a different state).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convergence of domain and infrastructure errors for engine operations.
///
/// Presentation layers match on `Domain` variants to pick a user-facing
/// message or redirect; `Database` variants render as generic failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] CoreError),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl From<libsql::Error> for ServiceError {
    fn from(err: libsql::Error) -> Self {
        Self::Database(DatabaseError::from(err))
    }
}
