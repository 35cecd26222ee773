//! SeaORM entity definitions for the character server schema.

pub mod prelude;

pub mod character;
pub mod game_match;
pub mod goal;
pub mod user;
pub mod wildcard_invitation;
