//! User domain models and parameters.
//!
//! Provides the user domain model with credentials and the admin flag, plus the
//! parameter types consumed by registration and login. The password hash never leaves
//! this layer: `into_dto` drops it.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{CredentialsDto, UserDto, UserWithCharacterDto},
    server::model::character::Character,
};

/// Registered account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    /// Whether the user has admin privileges.
    pub admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses, dropping the password hash.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            is_admin: self.admin,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            password_hash: entity.password,
            admin: entity.admin,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// A user joined with the character they own, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct UserWithCharacter {
    pub user: User,
    pub character: Option<Character>,
}

impl UserWithCharacter {
    pub fn from_entity(
        (user, character): (entity::user::Model, Option<entity::character::Model>),
    ) -> Self {
        Self {
            user: User::from_entity(user),
            character: character.map(Character::from_entity),
        }
    }

    pub fn into_dto(self) -> UserWithCharacterDto {
        UserWithCharacterDto {
            user: self.user.into_dto(),
            character: self.character.map(|c| c.into_dto()),
        }
    }
}

/// Parameters for inserting a new user row.
///
/// The password must already be hashed; repositories never see plain passwords.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub password_hash: String,
    pub admin: bool,
}

/// Plain username/password pair submitted to register or login.
#[derive(Debug, Clone)]
pub struct CredentialsParam {
    pub username: String,
    pub password: String,
}

impl From<CredentialsDto> for CredentialsParam {
    fn from(dto: CredentialsDto) -> Self {
        Self {
            username: dto.username.trim().to_string(),
            password: dto.password,
        }
    }
}
