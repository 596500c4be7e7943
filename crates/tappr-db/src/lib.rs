//! # tappr-db
//!
//! libSQL persistence and the discovery engine for Tappr.
//!
//! Handles all stored state: discovery sessions, chat connection requests,
//! chat rooms, and the card-code registry. The hosted document store the
//! apps talk to is modeled here as a local libSQL database with JSON TEXT
//! columns for nested document fields; live session updates are delivered
//! through `tokio::sync::watch` channels.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod watch;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for all Tappr state operations.
///
/// Wraps a libSQL database and connection, and provides prefixed random ID
/// generation. Repository methods live on [`service::TapprService`].
pub struct TapprDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl TapprDb {
    /// Open a local-only database at the given path (`":memory:"` in tests).
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let tappr_db = Self { db, conn };
        tappr_db.run_migrations().await?;
        Ok(tappr_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"dsc-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}

#[cfg(test)]
mod test_support;
