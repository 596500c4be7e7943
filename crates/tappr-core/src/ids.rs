//! ID prefix constants.
//!
//! Every stored record carries a short prefixed random ID, e.g.
//! `dsc-a3f8b2c1`. The database layer generates the random part.

/// Discovery session IDs.
pub const PREFIX_SESSION: &str = "dsc";

/// Chat connection request IDs.
pub const PREFIX_CONNECTION: &str = "con";

/// Chat room IDs.
pub const PREFIX_CHAT: &str = "cht";

/// Card code record IDs (not the printed card code itself).
pub const PREFIX_CARD: &str = "crd";
