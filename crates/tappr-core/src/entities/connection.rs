use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ConnectionStatus;

/// A chat connection request, created when a card visitor chooses "Chat".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ChatConnection {
    pub id: String,
    pub from_user_id: String,
    pub to_user_id: String,
    pub from_user_name: String,
    pub to_user_name: String,
    /// The card code that initiated the connection, when known.
    pub card_code: Option<String>,
    pub status: ConnectionStatus,
    pub created_at: DateTime<Utc>,
    pub accepted_at: Option<DateTime<Utc>>,
}

/// A chat room, created when a connection request is accepted.
///
/// Messaging itself lives in the presentation layer's store bindings; this
/// record only establishes the room and its two participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Chat {
    pub id: String,
    /// User IDs of both participants.
    pub participants: Vec<String>,
    /// User ID → display name.
    pub participant_names: BTreeMap<String, String>,
    pub created_at: DateTime<Utc>,
}
