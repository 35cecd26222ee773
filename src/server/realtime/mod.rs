//! Realtime notification channel.
//!
//! - `registry` - In-process map from user ID to that user's open sockets
//! - `socket` - Per-connection task driving the handshake and outbound pushes
//!
//! Delivery is best effort. Events are never persisted; clients that miss one recover
//! through the HTTP read endpoints.

pub mod registry;
pub mod socket;
