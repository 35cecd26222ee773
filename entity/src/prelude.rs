pub use super::character::Entity as Character;
pub use super::game_match::Entity as GameMatch;
pub use super::goal::Entity as Goal;
pub use super::user::Entity as User;
pub use super::wildcard_invitation::Entity as WildcardInvitation;
