//! End-to-end discovery flow tests against an in-memory database.

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;

use tappr_config::GeneralConfig;
use tappr_core::entities::DiscoverySession;
use tappr_core::enums::SessionStatus;
use tappr_core::errors::CoreError;
use tappr_core::identity::Identity;
use tappr_db::TapprDb;
use tappr_db::error::ServiceError;
use tappr_db::service::TapprService;

async fn service() -> TapprService {
    let db = TapprDb::open_local(":memory:")
        .await
        .expect("in-memory database should open");
    TapprService::from_db(db, &GeneralConfig::default())
}

fn visitor() -> Identity {
    Identity::new("user-visitor", "Sam")
}

fn owner() -> Identity {
    Identity::new("user-owner", "Alex")
}

fn first_options(session: &DiscoverySession) -> BTreeMap<String, String> {
    session
        .questions
        .iter()
        .map(|q| (q.id.clone(), q.options[0].clone()))
        .collect()
}

/// Backdate a session's expiry so the sweep sees it as stale.
async fn backdate_expiry(service: &TapprService, session_id: &str) {
    let past = (chrono::Utc::now() - chrono::Duration::hours(1)).to_rfc3339();
    service
        .db()
        .conn()
        .execute(
            "UPDATE discovery_sessions SET expires_at = ?1 WHERE id = ?2",
            libsql::params![past, session_id],
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn anonymous_view_allowed_only_while_pending_initiator() {
    let service = service().await;
    let session = service
        .create_session(Some(&visitor()), "user-owner", "Alex", "Sam")
        .await
        .unwrap();

    // The visitor who just created the session has no account yet.
    assert!(service.view_session(&session.id, None).await.is_ok());

    service
        .submit_initiator_answers(&session.id, first_options(&session))
        .await
        .unwrap();

    let err = service.view_session(&session.id, None).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(CoreError::NotAuthorized { .. })
    ));

    // Both parties can still view; a third user cannot.
    assert!(service.view_session(&session.id, Some(&visitor())).await.is_ok());
    assert!(service.view_session(&session.id, Some(&owner())).await.is_ok());
    let stranger = Identity::new("user-stranger", "Jo");
    assert!(matches!(
        service.view_session(&session.id, Some(&stranger)).await,
        Err(ServiceError::Domain(CoreError::NotAuthorized { .. }))
    ));
}

#[tokio::test]
async fn expired_session_is_rejected_before_the_sweep_runs() {
    let service = service().await;
    let session = service
        .create_session(Some(&visitor()), "user-owner", "Alex", "Sam")
        .await
        .unwrap();
    backdate_expiry(&service, &session.id).await;

    let err = service
        .view_session(&session.id, Some(&visitor()))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(CoreError::SessionExpired { .. })
    ));
}

#[tokio::test]
async fn subscription_sees_both_answer_submissions() {
    let service = service().await;
    let session = service
        .create_session(Some(&visitor()), "user-owner", "Alex", "Sam")
        .await
        .unwrap();
    let answers = first_options(&session);

    let mut rx = service.subscribe_to_session(&session.id).await.unwrap();
    assert_eq!(rx.borrow().status, SessionStatus::PendingInitiator);

    service
        .submit_initiator_answers(&session.id, answers.clone())
        .await
        .unwrap();
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow().status, SessionStatus::PendingTarget);

    service
        .submit_target_answers(&session.id, answers)
        .await
        .unwrap();
    rx.changed().await.unwrap();
    let completed = rx.borrow().clone();
    assert_eq!(completed.status, SessionStatus::Completed);
    assert_eq!(completed.compatibility_score, Some(100));
}

#[tokio::test]
async fn sweep_expires_stale_pending_sessions_only() {
    let service = service().await;

    let stale = service
        .create_session(Some(&visitor()), "user-owner", "Alex", "Sam")
        .await
        .unwrap();
    backdate_expiry(&service, &stale.id).await;

    let fresh = service
        .create_session(Some(&visitor()), "user-owner", "Alex", "Sam")
        .await
        .unwrap();

    let done = service
        .create_session(Some(&visitor()), "user-owner", "Alex", "Sam")
        .await
        .unwrap();
    let answers = first_options(&done);
    service
        .submit_initiator_answers(&done.id, answers.clone())
        .await
        .unwrap();
    service.submit_target_answers(&done.id, answers).await.unwrap();
    backdate_expiry(&service, &done.id).await;

    assert_eq!(service.sweep_expired_sessions().await.unwrap(), 1);

    assert_eq!(
        service.get_session(&stale.id).await.unwrap().status,
        SessionStatus::Expired
    );
    assert_eq!(
        service.get_session(&fresh.id).await.unwrap().status,
        SessionStatus::PendingInitiator
    );
    assert_eq!(
        service.get_session(&done.id).await.unwrap().status,
        SessionStatus::Completed
    );

    // Second pass finds nothing left to do.
    assert_eq!(service.sweep_expired_sessions().await.unwrap(), 0);
}

#[tokio::test]
async fn sweep_notifies_subscribers() {
    let service = service().await;
    let session = service
        .create_session(Some(&visitor()), "user-owner", "Alex", "Sam")
        .await
        .unwrap();
    let mut rx = service.subscribe_to_session(&session.id).await.unwrap();

    backdate_expiry(&service, &session.id).await;
    service.sweep_expired_sessions().await.unwrap();

    rx.changed().await.unwrap();
    assert_eq!(rx.borrow().status, SessionStatus::Expired);
}

#[tokio::test]
async fn listings_filter_by_role_and_status() {
    let service = service().await;

    let waiting = service
        .create_session(Some(&visitor()), "user-owner", "Alex", "Sam")
        .await
        .unwrap();
    service
        .submit_initiator_answers(&waiting.id, first_options(&waiting))
        .await
        .unwrap();

    let done = service
        .create_session(Some(&visitor()), "user-owner", "Alex", "Sam")
        .await
        .unwrap();
    let answers = first_options(&done);
    service
        .submit_initiator_answers(&done.id, answers.clone())
        .await
        .unwrap();
    service.submit_target_answers(&done.id, answers).await.unwrap();

    let pending = service.pending_sessions_for_target("user-owner").await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, waiting.id);

    let completed = service
        .completed_sessions_for_initiator("user-visitor")
        .await
        .unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, done.id);

    assert!(service
        .pending_sessions_for_target("user-visitor")
        .await
        .unwrap()
        .is_empty());
}
