//! Discovery session repository: the two-phase compatibility flow.
//!
//! Status transitions are guarded twice: once in memory through
//! `SessionStatus::can_transition_to`, and once in SQL with a conditional
//! UPDATE keyed on the expected current status. A concurrent writer that
//! raced us leaves the UPDATE affecting zero rows, which surfaces as
//! `DatabaseError::InvalidState` instead of silently clobbering answers.

use std::collections::BTreeMap;

use chrono::Utc;

use tappr_core::compatibility::{CompatibilityResult, calculate_compatibility};
use tappr_core::entities::DiscoverySession;
use tappr_core::enums::SessionStatus;
use tappr_core::errors::CoreError;
use tappr_core::identity::Identity;
use tappr_core::ids::PREFIX_SESSION;

use crate::error::{DatabaseError, ServiceError};
use crate::helpers::{
    get_opt_string, parse_answer_map, parse_datetime, parse_enum, parse_json,
    parse_optional_datetime, parse_optional_score,
};
use crate::service::TapprService;
use crate::watch::SessionReceiver;

const SESSION_COLUMNS: &str = "id, initiator_id, initiator_name, target_user_id, \
     target_user_name, questions, initiator_answers, target_answers, status, \
     compatibility_score, created_at, completed_at, expires_at";

impl TapprService {
    /// Create a new discovery session with a balanced random question set.
    ///
    /// The caller must be authenticated; the initiator is taken from
    /// `identity`, never from request data. Questions are snapshotted into
    /// the session at creation.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::AuthenticationRequired` when `identity` is
    /// `None`, or `DatabaseError` on storage failures.
    pub async fn create_session(
        &self,
        identity: Option<&Identity>,
        target_user_id: &str,
        target_user_name: &str,
        initiator_name: &str,
    ) -> Result<DiscoverySession, ServiceError> {
        let identity = identity.ok_or(CoreError::AuthenticationRequired)?;

        let id = self.db().generate_id(PREFIX_SESSION).await?;
        let questions = tappr_bank::balanced_random_questions(self.question_count());
        let now = Utc::now();

        let session = DiscoverySession {
            id,
            initiator_id: identity.user_id.clone(),
            initiator_name: initiator_name.to_string(),
            target_user_id: target_user_id.to_string(),
            target_user_name: target_user_name.to_string(),
            questions,
            initiator_answers: BTreeMap::new(),
            target_answers: BTreeMap::new(),
            status: SessionStatus::PendingInitiator,
            compatibility_score: None,
            created_at: now,
            completed_at: None,
            expires_at: now + self.session_ttl(),
        };

        let questions_json = serde_json::to_string(&session.questions)
            .map_err(|e| DatabaseError::Query(format!("Failed to serialize questions: {e}")))?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO discovery_sessions (
                    id, initiator_id, initiator_name, target_user_id, target_user_name,
                    questions, status, created_at, expires_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                libsql::params![
                    session.id.clone(),
                    session.initiator_id.clone(),
                    session.initiator_name.clone(),
                    session.target_user_id.clone(),
                    session.target_user_name.clone(),
                    questions_json,
                    session.status.as_str(),
                    session.created_at.to_rfc3339(),
                    session.expires_at.to_rfc3339(),
                ],
            )
            .await?;

        tracing::debug!(
            session_id = %session.id,
            initiator = %session.initiator_id,
            target = %session.target_user_id,
            questions = session.questions.len(),
            "created discovery session"
        );

        Ok(session)
    }

    /// Fetch a session by ID.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SessionNotFound` when no row matches.
    pub async fn get_session(&self, session_id: &str) -> Result<DiscoverySession, ServiceError> {
        self.fetch_session(session_id)
            .await?
            .ok_or_else(|| {
                ServiceError::Domain(CoreError::SessionNotFound {
                    id: session_id.to_string(),
                })
            })
    }

    /// Fetch a session and check the viewer may see it.
    ///
    /// Checks expiry by timestamp (not stored status, the sweep may lag)
    /// and then party membership. Anonymous viewers are admitted only
    /// while the session is still `pending_initiator`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SessionNotFound`, `CoreError::SessionExpired`,
    /// or `CoreError::NotAuthorized`.
    pub async fn view_session(
        &self,
        session_id: &str,
        viewer: Option<&Identity>,
    ) -> Result<DiscoverySession, ServiceError> {
        let session = self.get_session(session_id).await?;
        session.authorize_view(viewer, Utc::now())?;
        Ok(session)
    }

    /// Record the initiator's answers and advance to `pending_target`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` when the session is not in
    /// `pending_initiator`, including when a concurrent writer won the race.
    pub async fn submit_initiator_answers(
        &self,
        session_id: &str,
        answers: BTreeMap<String, String>,
    ) -> Result<DiscoverySession, ServiceError> {
        let current = self.get_session(session_id).await?;
        if !current.status.can_transition_to(SessionStatus::PendingTarget) {
            return Err(DatabaseError::InvalidState(format!(
                "Cannot submit initiator answers for session {session_id} in status '{}'",
                current.status
            ))
            .into());
        }

        let answers_json = serde_json::to_string(&answers)
            .map_err(|e| DatabaseError::Query(format!("Failed to serialize answers: {e}")))?;

        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE discovery_sessions
                 SET initiator_answers = ?1, status = 'pending_target'
                 WHERE id = ?2 AND status = 'pending_initiator'",
                libsql::params![answers_json, session_id],
            )
            .await?;
        if affected == 0 {
            return Err(DatabaseError::InvalidState(format!(
                "Session {session_id} changed status before initiator answers were stored"
            ))
            .into());
        }

        let updated = DiscoverySession {
            initiator_answers: answers,
            status: SessionStatus::PendingTarget,
            ..current
        };

        tracing::debug!(session_id = %updated.id, "initiator answers submitted");
        self.watch().publish(updated.clone());

        Ok(updated)
    }

    /// Record the target's answers, compute compatibility, and complete
    /// the session.
    ///
    /// Score and insights are computed over the session's question
    /// snapshot; questions neither party answered still count as matches.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` when the session is not in
    /// `pending_target`, including when a concurrent writer won the race.
    pub async fn submit_target_answers(
        &self,
        session_id: &str,
        answers: BTreeMap<String, String>,
    ) -> Result<CompatibilityResult, ServiceError> {
        let current = self.get_session(session_id).await?;
        if !current.status.can_transition_to(SessionStatus::Completed) {
            return Err(DatabaseError::InvalidState(format!(
                "Cannot submit target answers for session {session_id} in status '{}'",
                current.status
            ))
            .into());
        }

        let result =
            calculate_compatibility(&current.questions, &current.initiator_answers, &answers);
        let completed_at = Utc::now();

        let answers_json = serde_json::to_string(&answers)
            .map_err(|e| DatabaseError::Query(format!("Failed to serialize answers: {e}")))?;

        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE discovery_sessions
                 SET target_answers = ?1, status = 'completed',
                     compatibility_score = ?2, completed_at = ?3
                 WHERE id = ?4 AND status = 'pending_target'",
                libsql::params![
                    answers_json,
                    i64::from(result.score),
                    completed_at.to_rfc3339(),
                    session_id
                ],
            )
            .await?;
        if affected == 0 {
            return Err(DatabaseError::InvalidState(format!(
                "Session {session_id} changed status before target answers were stored"
            ))
            .into());
        }

        let updated = DiscoverySession {
            target_answers: answers,
            status: SessionStatus::Completed,
            compatibility_score: Some(result.score),
            completed_at: Some(completed_at),
            ..current
        };

        tracing::info!(
            session_id = %updated.id,
            score = result.score,
            matches = result.matches.len(),
            "discovery session completed"
        );
        self.watch().publish(updated);

        Ok(result)
    }

    /// Subscribe to live updates for a session.
    ///
    /// The receiver is seeded with the current snapshot; every subsequent
    /// mutation (answer submissions, expiry sweep) delivers a fresh one.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SessionNotFound` when the session does not exist.
    pub async fn subscribe_to_session(
        &self,
        session_id: &str,
    ) -> Result<SessionReceiver, ServiceError> {
        let current = self.get_session(session_id).await?;
        Ok(self.watch().subscribe(current))
    }

    /// Flip pending sessions past their expiry timestamp to `expired`.
    ///
    /// Returns the number of sessions expired. Each flip is guarded, so a
    /// session completed between the scan and the update is left alone.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failures.
    pub async fn sweep_expired_sessions(&self) -> Result<usize, ServiceError> {
        let now = Utc::now().to_rfc3339();
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id FROM discovery_sessions
                 WHERE expires_at < ?1
                   AND status IN ('pending_initiator', 'pending_target')",
                [now],
            )
            .await?;

        let mut stale = Vec::new();
        while let Some(row) = rows.next().await? {
            stale.push(row.get::<String>(0)?);
        }

        let mut expired = 0usize;
        for id in stale {
            let affected = self
                .db()
                .conn()
                .execute(
                    "UPDATE discovery_sessions SET status = 'expired'
                     WHERE id = ?1 AND status IN ('pending_initiator', 'pending_target')",
                    [id.as_str()],
                )
                .await?;
            if affected > 0 {
                expired += 1;
                if let Some(session) = self.fetch_session(&id).await? {
                    self.watch().publish(session);
                }
            }
        }

        if expired > 0 {
            tracing::info!(expired, "expired stale discovery sessions");
        }

        Ok(expired)
    }

    /// Sessions awaiting this user's answers as target, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failures.
    pub async fn pending_sessions_for_target(
        &self,
        user_id: &str,
    ) -> Result<Vec<DiscoverySession>, ServiceError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SESSION_COLUMNS} FROM discovery_sessions
                     WHERE target_user_id = ?1 AND status = 'pending_target'
                     ORDER BY created_at DESC"
                ),
                [user_id],
            )
            .await?;

        let mut sessions = Vec::new();
        while let Some(row) = rows.next().await? {
            sessions.push(row_to_session(&row)?);
        }
        Ok(sessions)
    }

    /// Completed sessions this user initiated, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failures.
    pub async fn completed_sessions_for_initiator(
        &self,
        user_id: &str,
    ) -> Result<Vec<DiscoverySession>, ServiceError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SESSION_COLUMNS} FROM discovery_sessions
                     WHERE initiator_id = ?1 AND status = 'completed'
                     ORDER BY created_at DESC"
                ),
                [user_id],
            )
            .await?;

        let mut sessions = Vec::new();
        while let Some(row) = rows.next().await? {
            sessions.push(row_to_session(&row)?);
        }
        Ok(sessions)
    }

    pub(crate) async fn fetch_session(
        &self,
        session_id: &str,
    ) -> Result<Option<DiscoverySession>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SESSION_COLUMNS} FROM discovery_sessions WHERE id = ?1"),
                [session_id],
            )
            .await?;

        match rows.next().await? {
            Some(row) => Ok(Some(row_to_session(&row)?)),
            None => Ok(None),
        }
    }
}

fn row_to_session(row: &libsql::Row) -> Result<DiscoverySession, DatabaseError> {
    Ok(DiscoverySession {
        id: row.get::<String>(0)?,
        initiator_id: row.get::<String>(1)?,
        initiator_name: row.get::<String>(2)?,
        target_user_id: row.get::<String>(3)?,
        target_user_name: row.get::<String>(4)?,
        questions: parse_json(&row.get::<String>(5)?)?,
        initiator_answers: parse_answer_map(&row.get::<String>(6)?)?,
        target_answers: parse_answer_map(&row.get::<String>(7)?)?,
        status: parse_enum(&row.get::<String>(8)?)?,
        compatibility_score: parse_optional_score(row.get::<Option<i64>>(9)?)?,
        created_at: parse_datetime(&row.get::<String>(10)?)?,
        completed_at: parse_optional_datetime(get_opt_string(row, 11)?.as_deref())?,
        expires_at: parse_datetime(&row.get::<String>(12)?)?,
    })
}
