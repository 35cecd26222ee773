//! JSON data transfer objects exchanged with the browser client.
//!
//! These types define the wire format of the HTTP API and the WebSocket channel.
//! Field names are serialized in camelCase.

pub mod admin;
pub mod api;
pub mod character;
pub mod event;
pub mod game_match;
pub mod user;
pub mod wildcard;
