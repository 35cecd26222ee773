//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Enforcing rules such as one character per user and the
//!   invitation and match state machines
//! - **Orchestration**: Coordinating repository calls and realtime pushes
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod admin;
pub mod auth;
pub mod character;
pub mod game_match;
pub mod wildcard;

#[cfg(test)]
mod test;
