//! Factories for inserting test rows with sensible defaults.
//!
//! Each factory sets every column explicitly, so rows insert cleanly into tables
//! generated from entities (which carry no column defaults).

pub mod character;
pub mod game_match;
pub mod helpers;
pub mod user;
pub mod wildcard_invitation;

pub use character::{create_character, CharacterFactory};
pub use game_match::{create_match, MatchFactory};
pub use helpers::create_user_with_character;
pub use user::{create_user, UserFactory};
pub use wildcard_invitation::{create_invitation, WildCardInvitationFactory};
