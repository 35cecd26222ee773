//! HTTP request handlers.
//!
//! Controllers authenticate the request through `AuthGuard`, validate bodies against
//! their payload schema, convert DTOs into domain parameters, call a service, and
//! convert the result back into a DTO.

pub mod admin;
pub mod auth;
pub mod character;
pub mod game_match;
pub mod realtime;
pub mod wildcard;
