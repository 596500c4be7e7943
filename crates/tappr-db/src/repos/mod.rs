//! Repository methods, implemented as `impl TapprService` blocks.

mod card;
mod connection;
mod discovery;
