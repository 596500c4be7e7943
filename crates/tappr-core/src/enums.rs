//! Question categories and status enums for Tappr.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Status enums with state machines provide `allowed_next_states()` to enforce
//! valid transitions at the application layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// QuestionCategory
// ---------------------------------------------------------------------------

/// Category a compatibility question belongs to.
///
/// The declared order matters: balanced sampling hands the remainder
/// (`count % num_categories`) to the first categories in this order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Lifestyle,
    Values,
    Entertainment,
    Food,
    Social,
    Goals,
    Personality,
    Preferences,
}

impl QuestionCategory {
    /// Every category, in declared order.
    pub const ALL: [Self; 8] = [
        Self::Lifestyle,
        Self::Values,
        Self::Entertainment,
        Self::Food,
        Self::Social,
        Self::Goals,
        Self::Personality,
        Self::Preferences,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lifestyle => "lifestyle",
            Self::Values => "values",
            Self::Entertainment => "entertainment",
            Self::Food => "food",
            Self::Social => "social",
            Self::Goals => "goals",
            Self::Personality => "personality",
            Self::Preferences => "preferences",
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SessionStatus
// ---------------------------------------------------------------------------

/// Status of a discovery session.
///
/// ```text
/// pending_initiator → pending_target → completed
/// pending_initiator → expired   (sweep, past expires_at)
/// pending_target    → expired   (sweep, past expires_at)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    PendingInitiator,
    PendingTarget,
    Completed,
    Expired,
}

impl SessionStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::PendingInitiator => &[Self::PendingTarget, Self::Expired],
            Self::PendingTarget => &[Self::Completed, Self::Expired],
            Self::Completed | Self::Expired => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Whether the session is still waiting on an answer set.
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::PendingInitiator | Self::PendingTarget)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PendingInitiator => "pending_initiator",
            Self::PendingTarget => "pending_target",
            Self::Completed => "completed",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ConnectionStatus
// ---------------------------------------------------------------------------

/// Status of a chat connection request.
///
/// ```text
/// pending → accepted   (chat room created)
///         → declined
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    Pending,
    Accepted,
    Declined,
}

impl ConnectionStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Accepted, Self::Declined],
            Self::Accepted | Self::Declined => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
