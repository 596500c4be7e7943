//! Card code repository: NFC/QR code resolution and tap counting.

use tappr_core::entities::{CardCode, CardLookup};

use crate::error::{DatabaseError, ServiceError};
use crate::helpers::{get_opt_string, parse_datetime, parse_optional_datetime};
use crate::service::TapprService;

const CARD_COLUMNS: &str =
    "id, code, user_id, username, created_at, last_used, tap_count, active";

impl TapprService {
    /// Resolve a printed card code to its owner.
    ///
    /// Unknown codes resolve to `None` rather than an error; a scan of a
    /// stale card is an expected path, not a failure.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failures.
    pub async fn lookup_card(&self, code: &str) -> Result<Option<CardLookup>, ServiceError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT user_id, username, active FROM card_codes WHERE code = ?1",
                [code],
            )
            .await?;

        match rows.next().await? {
            Some(row) => Ok(Some(CardLookup {
                user_id: row.get::<String>(0)?,
                username: row.get::<String>(1)?,
                active: row.get::<i64>(2)? != 0,
            })),
            None => Ok(None),
        }
    }

    /// Record a tap against a card code: bump the count and stamp
    /// `last_used`.
    ///
    /// Silently does nothing for unknown codes; tap metrics must never
    /// break the scan flow.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failures.
    pub async fn record_tap(&self, code: &str) -> Result<(), ServiceError> {
        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE card_codes
                 SET tap_count = tap_count + 1, last_used = ?1
                 WHERE code = ?2",
                libsql::params![chrono::Utc::now().to_rfc3339(), code],
            )
            .await?;

        if affected == 0 {
            tracing::debug!(code, "tap recorded against unknown card code");
        }
        Ok(())
    }

    /// All card records registered to a user, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failures.
    pub async fn cards_for_user(&self, user_id: &str) -> Result<Vec<CardCode>, ServiceError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {CARD_COLUMNS} FROM card_codes
                     WHERE user_id = ?1
                     ORDER BY created_at DESC"
                ),
                [user_id],
            )
            .await?;

        let mut cards = Vec::new();
        while let Some(row) = rows.next().await? {
            cards.push(row_to_card(&row)?);
        }
        Ok(cards)
    }
}

fn row_to_card(row: &libsql::Row) -> Result<CardCode, DatabaseError> {
    Ok(CardCode {
        id: row.get::<String>(0)?,
        code: row.get::<String>(1)?,
        user_id: row.get::<String>(2)?,
        username: row.get::<String>(3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
        last_used: parse_optional_datetime(get_opt_string(row, 5)?.as_deref())?,
        tap_count: row.get::<i64>(6)?,
        active: row.get::<i64>(7)? != 0,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::test_support::{insert_test_card, test_service};

    #[tokio::test]
    async fn lookup_resolves_known_code() {
        let service = test_service().await;
        insert_test_card(&service, "abc123de", "user-owner", "alex")
            .await
            .unwrap();

        let lookup = service.lookup_card("abc123de").await.unwrap().unwrap();
        assert_eq!(lookup.user_id, "user-owner");
        assert_eq!(lookup.username, "alex");
        assert!(lookup.active);
    }

    #[tokio::test]
    async fn lookup_unknown_code_is_none() {
        let service = test_service().await;
        assert!(service.lookup_card("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn record_tap_bumps_count_and_last_used() {
        let service = test_service().await;
        insert_test_card(&service, "abc123de", "user-owner", "alex")
            .await
            .unwrap();

        service.record_tap("abc123de").await.unwrap();
        service.record_tap("abc123de").await.unwrap();

        let cards = service.cards_for_user("user-owner").await.unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].tap_count, 2);
        assert!(cards[0].last_used.is_some());
    }

    #[tokio::test]
    async fn record_tap_on_unknown_code_is_a_no_op() {
        let service = test_service().await;
        service.record_tap("nope").await.unwrap();
    }
}
