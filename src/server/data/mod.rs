//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Multi-row writes that must succeed or fail together run inside a single transaction.

pub mod character;
pub mod game_match;
pub mod user;
pub mod wildcard;

#[cfg(test)]
mod test;
