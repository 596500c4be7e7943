//! Service layer owning the discovery engine's lifecycle operations.
//!
//! `TapprService` wraps `TapprDb` (raw database access), the session watch
//! registry (live subscriptions), and the sampling settings from config.
//! All repo methods are implemented as `impl TapprService` blocks under
//! `repos/`.

use chrono::Duration;

use tappr_config::GeneralConfig;

use crate::TapprDb;
use crate::error::DatabaseError;
use crate::watch::SessionWatch;

/// Orchestrates discovery sessions, connection requests, and card lookups.
///
/// A plain value constructed once at process start and passed by reference;
/// it holds no mutable state beyond the store connection and the
/// subscription registry.
pub struct TapprService {
    db: TapprDb,
    watch: SessionWatch,
    question_count: usize,
    session_ttl: Duration,
}

impl TapprService {
    /// Create a new service wrapping a local database.
    ///
    /// Validates the question bank on construction; failures are logged and
    /// reported but never fatal, since the bank is compiled-in static data.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn new_local(
        db_path: &str,
        general: &GeneralConfig,
    ) -> Result<Self, DatabaseError> {
        let db = TapprDb::open_local(db_path).await?;
        Ok(Self::from_db(db, general))
    }

    /// Create from an existing `TapprDb` (for testing).
    #[must_use]
    pub fn from_db(db: TapprDb, general: &GeneralConfig) -> Self {
        let validation = tappr_bank::validate_bank();
        if !validation.is_valid {
            tracing::error!(errors = ?validation.errors, "question bank validation failed");
        }

        Self {
            db,
            watch: SessionWatch::new(),
            question_count: general.question_count,
            session_ttl: Duration::hours(general.session_ttl_hours),
        }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &TapprDb {
        &self.db
    }

    pub(crate) const fn watch(&self) -> &SessionWatch {
        &self.watch
    }

    pub(crate) const fn question_count(&self) -> usize {
        self.question_count
    }

    pub(crate) const fn session_ttl(&self) -> Duration {
        self.session_ttl
    }
}
