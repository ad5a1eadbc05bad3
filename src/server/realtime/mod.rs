//! Realtime relay over websockets.
//!
//! - `hub` - registry of live connections per user and fire-and-forget fan-out
//! - `event` - the `{"event", "data"}` envelope for both directions
//! - `socket` - the upgrade handler and per-connection loop

pub mod event;
pub mod hub;
pub mod socket;
