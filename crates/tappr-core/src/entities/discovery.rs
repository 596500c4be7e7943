use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{QuestionCategory, SessionStatus};
use crate::errors::CoreError;
use crate::identity::Identity;

/// One compatibility question from the static bank.
///
/// Immutable: sessions snapshot the questions they were created with, so
/// later bank edits never affect in-flight sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CompatibilityQuestion {
    /// Unique identifier across the whole bank, e.g. `lifestyle_3`.
    pub id: String,
    /// Prompt text shown to both parties.
    pub question: String,
    pub category: QuestionCategory,
    /// 2 to 6 answer options; both parties pick from the same list.
    pub options: Vec<String>,
    /// Decorative emoji shown next to the prompt.
    pub emoji: String,
}

/// A compatibility discovery session between an initiator (card visitor)
/// and a target (card owner).
///
/// Mutated exactly twice on the happy path: the initiator submits answers,
/// then the target does, at which point the score is computed. A stale
/// pending session may additionally be flipped to `expired` by the sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DiscoverySession {
    pub id: String,
    /// The visitor who tapped the card and clicked "Find out more".
    pub initiator_id: String,
    pub initiator_name: String,
    /// The card owner; answers second, usually from the mobile app.
    pub target_user_id: String,
    pub target_user_name: String,
    /// Fixed question snapshot, selected at creation and never changed.
    pub questions: Vec<CompatibilityQuestion>,
    /// Question id → chosen option text.
    pub initiator_answers: BTreeMap<String, String>,
    pub target_answers: BTreeMap<String, String>,
    pub status: SessionStatus,
    /// Integer percentage 0–100, present only once completed.
    pub compatibility_score: Option<u8>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    /// Creation time plus the configured TTL (48 hours by default).
    pub expires_at: DateTime<Utc>,
}

impl DiscoverySession {
    /// Whether the expiry timestamp has passed, independent of the stored
    /// status (the sweep may not have run yet).
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }

    /// Authorization gate for session detail pages.
    ///
    /// Anonymous viewers may see a session only while it is
    /// `pending_initiator` (they are presumed to be the initiator who just
    /// created it). Authenticated viewers must be one of the two parties.
    /// Sessions past their expiry timestamp are rejected outright with a
    /// condition distinct from not-found.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SessionExpired` or `CoreError::NotAuthorized`.
    pub fn authorize_view(
        &self,
        viewer: Option<&Identity>,
        now: DateTime<Utc>,
    ) -> Result<(), CoreError> {
        if self.is_expired_at(now) {
            return Err(CoreError::SessionExpired {
                id: self.id.clone(),
            });
        }

        match viewer {
            None => {
                if self.status == SessionStatus::PendingInitiator {
                    Ok(())
                } else {
                    Err(CoreError::NotAuthorized {
                        id: self.id.clone(),
                    })
                }
            }
            Some(identity) => {
                if identity.user_id == self.initiator_id
                    || identity.user_id == self.target_user_id
                {
                    Ok(())
                } else {
                    Err(CoreError::NotAuthorized {
                        id: self.id.clone(),
                    })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn question(id: &str) -> CompatibilityQuestion {
        CompatibilityQuestion {
            id: id.to_string(),
            question: "Perfect weekend morning?".to_string(),
            category: QuestionCategory::Lifestyle,
            options: vec!["Sleep in until noon".to_string(), "Early morning workout".to_string()],
            emoji: "🌅".to_string(),
        }
    }

    fn session(status: SessionStatus) -> DiscoverySession {
        let now = Utc::now();
        DiscoverySession {
            id: "dsc-00000001".to_string(),
            initiator_id: "user-visitor".to_string(),
            initiator_name: "Sam".to_string(),
            target_user_id: "user-owner".to_string(),
            target_user_name: "Alex".to_string(),
            questions: vec![question("lifestyle_1")],
            initiator_answers: BTreeMap::new(),
            target_answers: BTreeMap::new(),
            status,
            compatibility_score: None,
            created_at: now,
            completed_at: None,
            expires_at: now + Duration::hours(48),
        }
    }

    #[test]
    fn anonymous_viewer_allowed_while_pending_initiator() {
        let s = session(SessionStatus::PendingInitiator);
        assert!(s.authorize_view(None, Utc::now()).is_ok());
    }

    #[test]
    fn anonymous_viewer_rejected_after_initiator_answered() {
        let s = session(SessionStatus::PendingTarget);
        assert!(matches!(
            s.authorize_view(None, Utc::now()),
            Err(CoreError::NotAuthorized { .. })
        ));
    }

    #[test]
    fn parties_may_view() {
        let s = session(SessionStatus::PendingTarget);
        let initiator = Identity::new("user-visitor", "Sam");
        let target = Identity::new("user-owner", "Alex");
        assert!(s.authorize_view(Some(&initiator), Utc::now()).is_ok());
        assert!(s.authorize_view(Some(&target), Utc::now()).is_ok());
    }

    #[test]
    fn third_party_rejected() {
        let s = session(SessionStatus::PendingInitiator);
        let stranger = Identity::new("user-stranger", "Jo");
        assert!(matches!(
            s.authorize_view(Some(&stranger), Utc::now()),
            Err(CoreError::NotAuthorized { .. })
        ));
    }

    #[test]
    fn expired_by_timestamp_rejected_regardless_of_status() {
        let mut s = session(SessionStatus::PendingInitiator);
        s.expires_at = Utc::now() - Duration::hours(1);
        assert!(matches!(
            s.authorize_view(None, Utc::now()),
            Err(CoreError::SessionExpired { .. })
        ));
        let initiator = Identity::new("user-visitor", "Sam");
        assert!(matches!(
            s.authorize_view(Some(&initiator), Utc::now()),
            Err(CoreError::SessionExpired { .. })
        ));
    }
}
