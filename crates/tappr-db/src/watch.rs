//! Live session subscriptions.
//!
//! The hosted store the apps run against pushes document change
//! notifications; here that surface is a `tokio::sync::watch` channel per
//! session. A new receiver immediately holds the current snapshot, and
//! every mutation publishes the fresh one. Receivers must tolerate seeing
//! the same state more than once; dropping the receiver unsubscribes.

use std::collections::HashMap;
use std::sync::Mutex;

use tokio::sync::watch;

use tappr_core::entities::DiscoverySession;

/// Receiver half of a session subscription.
///
/// `borrow()` yields the latest snapshot; `changed().await` resolves on the
/// next publish.
pub type SessionReceiver = watch::Receiver<DiscoverySession>;

/// Registry of live per-session channels.
///
/// Channels with no remaining receivers are pruned on the next publish.
#[derive(Default)]
pub(crate) struct SessionWatch {
    channels: Mutex<HashMap<String, watch::Sender<DiscoverySession>>>,
}

impl SessionWatch {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Subscribe to a session, seeding a fresh channel with `current`.
    ///
    /// `current` is read before this lock is taken, so an existing channel
    /// may already hold a newer snapshot than the caller's. It is never
    /// written back: a publish that landed in between must not be rolled
    /// back for receivers already watching.
    pub(crate) fn subscribe(&self, current: DiscoverySession) -> SessionReceiver {
        let mut channels = self.channels.lock().expect("watch registry poisoned");
        if let Some(tx) = channels.get(&current.id) {
            return tx.subscribe();
        }
        let (tx, rx) = watch::channel(current.clone());
        channels.insert(current.id, tx);
        rx
    }

    /// Publish a fresh snapshot to any subscribers of this session.
    pub(crate) fn publish(&self, session: DiscoverySession) {
        let mut channels = self.channels.lock().expect("watch registry poisoned");
        if let Some(tx) = channels.get(&session.id) {
            if tx.receiver_count() == 0 {
                channels.remove(&session.id);
                return;
            }
            let _ = tx.send(session);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::{Duration, Utc};

    use tappr_core::enums::SessionStatus;

    use super::*;

    fn session(status: SessionStatus) -> DiscoverySession {
        let now = Utc::now();
        DiscoverySession {
            id: "dsc-00000001".to_string(),
            initiator_id: "user-visitor".to_string(),
            initiator_name: "Sam".to_string(),
            target_user_id: "user-owner".to_string(),
            target_user_name: "Alex".to_string(),
            questions: Vec::new(),
            initiator_answers: BTreeMap::new(),
            target_answers: BTreeMap::new(),
            status,
            compatibility_score: None,
            created_at: now,
            completed_at: None,
            expires_at: now + Duration::hours(48),
        }
    }

    #[tokio::test]
    async fn publish_reaches_subscriber() {
        let watch = SessionWatch::new();
        let mut rx = watch.subscribe(session(SessionStatus::PendingTarget));

        watch.publish(session(SessionStatus::Completed));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().status, SessionStatus::Completed);
    }

    #[tokio::test]
    async fn late_subscriber_with_stale_snapshot_does_not_roll_back() {
        let watch = SessionWatch::new();
        let mut rx1 = watch.subscribe(session(SessionStatus::PendingTarget));

        watch.publish(session(SessionStatus::Completed));
        rx1.changed().await.unwrap();
        assert_eq!(rx1.borrow().status, SessionStatus::Completed);

        // A second subscriber whose database read raced the publish brings
        // an older snapshot. Completed is terminal; nothing may regress it.
        let rx2 = watch.subscribe(session(SessionStatus::PendingTarget));
        assert_eq!(rx2.borrow().status, SessionStatus::Completed);
        assert!(!rx1.has_changed().unwrap());
        assert_eq!(rx1.borrow().status, SessionStatus::Completed);
    }

    #[tokio::test]
    async fn publish_without_subscribers_is_a_no_op() {
        let watch = SessionWatch::new();
        watch.publish(session(SessionStatus::Completed));

        let rx = watch.subscribe(session(SessionStatus::PendingInitiator));
        assert_eq!(rx.borrow().status, SessionStatus::PendingInitiator);
    }
}
