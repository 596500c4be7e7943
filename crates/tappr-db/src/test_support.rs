//! Shared helpers for in-crate tests.

use tappr_config::GeneralConfig;
use tappr_core::identity::Identity;
use tappr_core::ids::PREFIX_CARD;

use crate::TapprDb;
use crate::error::ServiceError;
use crate::service::TapprService;

/// In-memory service with default settings (5 questions, 48 h TTL).
pub(crate) async fn test_service() -> TapprService {
    let db = TapprDb::open_local(":memory:")
        .await
        .expect("in-memory database should open");
    TapprService::from_db(db, &GeneralConfig::default())
}

pub(crate) fn visitor() -> Identity {
    Identity::new("user-visitor", "Sam")
}

pub(crate) fn owner() -> Identity {
    Identity::new("user-owner", "Alex")
}

/// Insert a card record directly, bypassing any provisioning flow.
pub(crate) async fn insert_test_card(
    service: &TapprService,
    code: &str,
    user_id: &str,
    username: &str,
) -> Result<(), ServiceError> {
    service
        .db()
        .conn()
        .execute(
            "INSERT INTO card_codes (id, code, user_id, username, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            libsql::params![
                format!("{PREFIX_CARD}-{code}"),
                code,
                user_id,
                username,
                chrono::Utc::now().to_rfc3339()
            ],
        )
        .await?;
    Ok(())
}
