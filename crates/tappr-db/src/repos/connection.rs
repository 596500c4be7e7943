//! Chat connection repository: request, accept (creating a chat), decline.

use std::collections::BTreeMap;

use chrono::Utc;

use tappr_core::entities::{Chat, ChatConnection};
use tappr_core::enums::ConnectionStatus;
use tappr_core::errors::CoreError;
use tappr_core::identity::Identity;
use tappr_core::ids::{PREFIX_CHAT, PREFIX_CONNECTION};

use crate::error::{DatabaseError, ServiceError};
use crate::helpers::{get_opt_string, parse_datetime, parse_enum, parse_optional_datetime};
use crate::service::TapprService;

const CONNECTION_COLUMNS: &str = "id, from_user_id, to_user_id, from_user_name, \
     to_user_name, card_code, status, created_at, accepted_at";

impl TapprService {
    /// Create a pending connection request toward another user.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::AuthenticationRequired` when `identity` is
    /// `None`, or `DatabaseError` on storage failures.
    pub async fn create_connection(
        &self,
        identity: Option<&Identity>,
        to_user_id: &str,
        to_user_name: &str,
        card_code: Option<&str>,
    ) -> Result<ChatConnection, ServiceError> {
        let identity = identity.ok_or(CoreError::AuthenticationRequired)?;

        let id = self.db().generate_id(PREFIX_CONNECTION).await?;
        let connection = ChatConnection {
            id,
            from_user_id: identity.user_id.clone(),
            to_user_id: to_user_id.to_string(),
            from_user_name: identity.display_name.clone(),
            to_user_name: to_user_name.to_string(),
            card_code: card_code.map(ToString::to_string),
            status: ConnectionStatus::Pending,
            created_at: Utc::now(),
            accepted_at: None,
        };

        self.db()
            .conn()
            .execute(
                "INSERT INTO chat_connections (
                    id, from_user_id, to_user_id, from_user_name, to_user_name,
                    card_code, status, created_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                libsql::params![
                    connection.id.clone(),
                    connection.from_user_id.clone(),
                    connection.to_user_id.clone(),
                    connection.from_user_name.clone(),
                    connection.to_user_name.clone(),
                    connection.card_code.clone(),
                    connection.status.as_str(),
                    connection.created_at.to_rfc3339(),
                ],
            )
            .await?;

        tracing::debug!(
            connection_id = %connection.id,
            from = %connection.from_user_id,
            to = %connection.to_user_id,
            "created connection request"
        );

        Ok(connection)
    }

    /// Accept a pending connection request, creating the chat room.
    ///
    /// Only the recipient may accept. The status flip is guarded in SQL,
    /// so accepting an already-resolved request fails instead of creating
    /// a second chat.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotAuthorized` when the caller is not the
    /// recipient, or `DatabaseError::InvalidState` when the request is no
    /// longer pending.
    pub async fn accept_connection(
        &self,
        identity: Option<&Identity>,
        connection_id: &str,
    ) -> Result<Chat, ServiceError> {
        let identity = identity.ok_or(CoreError::AuthenticationRequired)?;

        let connection = self.get_connection(connection_id).await?;
        if connection.to_user_id != identity.user_id {
            return Err(CoreError::NotAuthorized {
                id: connection_id.to_string(),
            }
            .into());
        }
        if !connection.status.can_transition_to(ConnectionStatus::Accepted) {
            return Err(DatabaseError::InvalidState(format!(
                "Cannot accept connection {connection_id} in status '{}'",
                connection.status
            ))
            .into());
        }

        let accepted_at = Utc::now();
        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE chat_connections SET status = 'accepted', accepted_at = ?1
                 WHERE id = ?2 AND status = 'pending'",
                libsql::params![accepted_at.to_rfc3339(), connection_id],
            )
            .await?;
        if affected == 0 {
            return Err(DatabaseError::InvalidState(format!(
                "Connection {connection_id} was resolved concurrently"
            ))
            .into());
        }

        let chat_id = self.db().generate_id(PREFIX_CHAT).await?;
        let mut participant_names = BTreeMap::new();
        participant_names.insert(
            connection.from_user_id.clone(),
            connection.from_user_name.clone(),
        );
        participant_names.insert(connection.to_user_id.clone(), connection.to_user_name.clone());

        let chat = Chat {
            id: chat_id,
            participants: vec![connection.from_user_id.clone(), connection.to_user_id.clone()],
            participant_names,
            created_at: accepted_at,
        };

        let participants_json = serde_json::to_string(&chat.participants)
            .map_err(|e| DatabaseError::Query(format!("Failed to serialize participants: {e}")))?;
        let names_json = serde_json::to_string(&chat.participant_names)
            .map_err(|e| DatabaseError::Query(format!("Failed to serialize names: {e}")))?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO chats (id, participants, participant_names, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    chat.id.clone(),
                    participants_json,
                    names_json,
                    chat.created_at.to_rfc3339()
                ],
            )
            .await?;

        tracing::info!(
            connection_id = %connection_id,
            chat_id = %chat.id,
            "connection accepted, chat created"
        );

        Ok(chat)
    }

    /// Decline a pending connection request.
    ///
    /// Only the recipient may decline.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotAuthorized` when the caller is not the
    /// recipient, or `DatabaseError::InvalidState` when the request is no
    /// longer pending.
    pub async fn decline_connection(
        &self,
        identity: Option<&Identity>,
        connection_id: &str,
    ) -> Result<ChatConnection, ServiceError> {
        let identity = identity.ok_or(CoreError::AuthenticationRequired)?;

        let connection = self.get_connection(connection_id).await?;
        if connection.to_user_id != identity.user_id {
            return Err(CoreError::NotAuthorized {
                id: connection_id.to_string(),
            }
            .into());
        }
        if !connection.status.can_transition_to(ConnectionStatus::Declined) {
            return Err(DatabaseError::InvalidState(format!(
                "Cannot decline connection {connection_id} in status '{}'",
                connection.status
            ))
            .into());
        }

        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE chat_connections SET status = 'declined'
                 WHERE id = ?1 AND status = 'pending'",
                [connection_id],
            )
            .await?;
        if affected == 0 {
            return Err(DatabaseError::InvalidState(format!(
                "Connection {connection_id} was resolved concurrently"
            ))
            .into());
        }

        tracing::debug!(connection_id = %connection_id, "connection declined");

        Ok(ChatConnection {
            status: ConnectionStatus::Declined,
            ..connection
        })
    }

    /// Fetch a connection request by ID.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` when no row matches.
    pub async fn get_connection(
        &self,
        connection_id: &str,
    ) -> Result<ChatConnection, ServiceError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {CONNECTION_COLUMNS} FROM chat_connections WHERE id = ?1"),
                [connection_id],
            )
            .await?;

        match rows.next().await? {
            Some(row) => Ok(row_to_connection(&row)?),
            None => Err(DatabaseError::NoResult.into()),
        }
    }

    /// Pending connection requests addressed to this user, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on storage failures.
    pub async fn pending_connections_for(
        &self,
        user_id: &str,
    ) -> Result<Vec<ChatConnection>, ServiceError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {CONNECTION_COLUMNS} FROM chat_connections
                     WHERE to_user_id = ?1 AND status = 'pending'
                     ORDER BY created_at DESC"
                ),
                [user_id],
            )
            .await?;

        let mut connections = Vec::new();
        while let Some(row) = rows.next().await? {
            connections.push(row_to_connection(&row)?);
        }
        Ok(connections)
    }
}

fn row_to_connection(row: &libsql::Row) -> Result<ChatConnection, DatabaseError> {
    Ok(ChatConnection {
        id: row.get::<String>(0)?,
        from_user_id: row.get::<String>(1)?,
        to_user_id: row.get::<String>(2)?,
        from_user_name: row.get::<String>(3)?,
        to_user_name: row.get::<String>(4)?,
        card_code: get_opt_string(row, 5)?,
        status: parse_enum(&row.get::<String>(6)?)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        accepted_at: parse_optional_datetime(get_opt_string(row, 8)?.as_deref())?,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use tappr_core::enums::ConnectionStatus;
    use tappr_core::errors::CoreError;

    use crate::error::{DatabaseError, ServiceError};
    use crate::test_support::{owner, test_service, visitor};

    #[tokio::test]
    async fn accept_creates_chat_with_both_participants() {
        let service = test_service().await;
        let connection = service
            .create_connection(Some(&visitor()), "user-owner", "Alex", Some("abc123de"))
            .await
            .unwrap();
        assert_eq!(connection.status, ConnectionStatus::Pending);

        let chat = service
            .accept_connection(Some(&owner()), &connection.id)
            .await
            .unwrap();
        assert_eq!(chat.participants, vec!["user-visitor", "user-owner"]);
        assert_eq!(chat.participant_names["user-visitor"], "Sam");
        assert_eq!(chat.participant_names["user-owner"], "Alex");

        let resolved = service.get_connection(&connection.id).await.unwrap();
        assert_eq!(resolved.status, ConnectionStatus::Accepted);
        assert!(resolved.accepted_at.is_some());
    }

    #[tokio::test]
    async fn only_recipient_may_accept() {
        let service = test_service().await;
        let connection = service
            .create_connection(Some(&visitor()), "user-owner", "Alex", None)
            .await
            .unwrap();

        let err = service
            .accept_connection(Some(&visitor()), &connection.id)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Domain(CoreError::NotAuthorized { .. })
        ));
    }

    #[tokio::test]
    async fn decline_is_terminal() {
        let service = test_service().await;
        let connection = service
            .create_connection(Some(&visitor()), "user-owner", "Alex", None)
            .await
            .unwrap();

        let declined = service
            .decline_connection(Some(&owner()), &connection.id)
            .await
            .unwrap();
        assert_eq!(declined.status, ConnectionStatus::Declined);

        let err = service
            .accept_connection(Some(&owner()), &connection.id)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Database(DatabaseError::InvalidState(_))
        ));
    }

    #[tokio::test]
    async fn pending_listing_excludes_resolved_requests() {
        let service = test_service().await;
        let first = service
            .create_connection(Some(&visitor()), "user-owner", "Alex", None)
            .await
            .unwrap();
        let second = service
            .create_connection(Some(&visitor()), "user-owner", "Alex", None)
            .await
            .unwrap();

        service
            .decline_connection(Some(&owner()), &first.id)
            .await
            .unwrap();

        let pending = service.pending_connections_for("user-owner").await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, second.id);
    }
}
