use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A physical NFC/QR card's registry record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CardCode {
    pub id: String,
    /// Short alphanumeric token printed into the card's NFC/QR payload.
    pub code: String,
    pub user_id: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub last_used: Option<DateTime<Utc>>,
    pub tap_count: i64,
    /// Inactive cards resolve but should not be presented as live profiles.
    pub active: bool,
}

/// The subset of card data a tap/scan resolution needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CardLookup {
    pub user_id: String,
    pub username: String,
    pub active: bool,
}
