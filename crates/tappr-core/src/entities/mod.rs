//! Entity structs for all Tappr domain objects.

mod card;
mod connection;
mod discovery;

pub use card::{CardCode, CardLookup};
pub use connection::{Chat, ChatConnection};
pub use discovery::{CompatibilityQuestion, DiscoverySession};
