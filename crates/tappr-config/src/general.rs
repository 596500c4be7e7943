//! General discovery-flow configuration.

use serde::{Deserialize, Serialize};

/// Questions per discovery session in the default flow.
const fn default_question_count() -> usize {
    5
}

/// Hours before a pending session expires.
const fn default_session_ttl_hours() -> i64 {
    48
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// How many questions a new session snapshots.
    #[serde(default = "default_question_count")]
    pub question_count: usize,

    /// Session time-to-live in hours; `expires_at = created_at + ttl`.
    #[serde(default = "default_session_ttl_hours")]
    pub session_ttl_hours: i64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            question_count: default_question_count(),
            session_ttl_hours: default_session_ttl_hours(),
        }
    }
}
