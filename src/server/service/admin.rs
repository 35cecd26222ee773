//! Admin service for dashboard reads and eliminations.
//!
//! This module provides the `AdminService` backing the admin-only endpoints: the user
//! listing with nested characters, aggregate statistics, and marking characters as
//! eliminated. Elimination does not send a Wild Card invitation; that is a separate,
//! explicit admin action handled by `WildCardService`.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        character::CharacterRepository, user::UserRepository,
        wildcard::WildCardInvitationRepository,
    },
    error::AppError,
    model::{admin::AdminStats, character::Character, user::UserWithCharacter},
};

/// Service providing business logic for admin dashboard operations.
pub struct AdminService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    /// Creates a new AdminService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AdminService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every user with their character, ordered by user ID.
    ///
    /// # Returns
    /// - `Ok(Vec<UserWithCharacter>)` - All users; password hashes are dropped at the DTO boundary
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_users(&self) -> Result<Vec<UserWithCharacter>, AppError> {
        let user_repo = UserRepository::new(self.db);
        let users = user_repo.get_all_with_characters().await?;
        Ok(users)
    }

    /// Computes the dashboard counters.
    ///
    /// Player counts are over characters: total, not eliminated, and eliminated.
    /// `total_goals` sums every character's goal counter.
    ///
    /// # Returns
    /// - `Ok(AdminStats)` - Current counters
    /// - `Err(AppError::DbErr)` - Database error during any count
    pub async fn get_stats(&self) -> Result<AdminStats, AppError> {
        let character_repo = CharacterRepository::new(self.db);
        let invitation_repo = WildCardInvitationRepository::new(self.db);

        let total_players = character_repo.count().await?;
        let active_players = character_repo.count_active().await?;
        let total_goals = character_repo.total_goals().await?;
        let pending_invitations = invitation_repo.count_pending().await?;

        Ok(AdminStats {
            total_players,
            active_players,
            eliminated_players: total_players.saturating_sub(active_players),
            total_goals,
            pending_invitations,
        })
    }

    /// Marks the user's character as eliminated.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the character to eliminate
    ///
    /// # Returns
    /// - `Ok(Character)` - The character with `is_eliminated` set
    /// - `Err(AppError::NotFound)` - The user has no character; nothing is written
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn eliminate(&self, user_id: i32) -> Result<Character, AppError> {
        let character_repo = CharacterRepository::new(self.db);

        let character = character_repo
            .set_eliminated(user_id, true)
            .await?
            .ok_or_else(|| AppError::NotFound("Character not found".to_string()))?;

        tracing::info!("Eliminated character {} of user {}", character.id, user_id);

        Ok(character)
    }

    /// Lists eliminated characters, best ranking first.
    pub async fn get_eliminated(&self) -> Result<Vec<Character>, AppError> {
        let character_repo = CharacterRepository::new(self.db);
        let characters = character_repo.get_eliminated().await?;
        Ok(characters)
    }
}
