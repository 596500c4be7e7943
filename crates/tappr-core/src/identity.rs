use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lightweight authenticated caller identity for cross-crate passing.
///
/// Produced by the hosted auth provider at the presentation layer and passed
/// explicitly into every operation that needs one. Contains only data fields;
/// no provider SDK calls happen below the surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Identity {
    /// Auth provider user ID.
    pub user_id: String,
    /// Display name shown to the other party.
    pub display_name: String,
}

impl Identity {
    #[must_use]
    pub fn new(user_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
        }
    }
}
