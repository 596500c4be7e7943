//! # tappr-core
//!
//! Core types and pure domain logic for the Tappr discovery flow.
//!
//! This crate provides the foundational types shared across all Tappr crates:
//! - Entity structs for discovery sessions, connections, chats, and cards
//! - Status enums with state machine transitions
//! - ID prefix constants
//! - Cross-cutting error types
//! - Caller identity passed explicitly into operations
//! - Compatibility scoring and insight generation

pub mod compatibility;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod ids;
