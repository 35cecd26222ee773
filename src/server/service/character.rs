//! Character service enforcing the one-character-per-user rule.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::character::CharacterRepository,
    error::AppError,
    model::character::{Character, CreateCharacterParam, UpdateCharacterParam},
};

const CHARACTER_EXISTS: &str = "Character already exists";
const CHARACTER_NOT_FOUND: &str = "Character not found";

pub struct CharacterService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the user's character.
    ///
    /// Two concurrent creates for the same user cannot both succeed: the loser either
    /// sees the existing row or hits the unique index on `user_id`. Both cases return
    /// `AppError::Conflict` and leave the existing character untouched.
    pub async fn create(&self, param: CreateCharacterParam) -> Result<Character, AppError> {
        let character_repo = CharacterRepository::new(self.db);

        if character_repo.find_by_user_id(param.user_id).await?.is_some() {
            return Err(AppError::Conflict(CHARACTER_EXISTS.to_string()));
        }

        character_repo
            .create(param)
            .await
            .map_err(|err| AppError::conflict_or_db(err, CHARACTER_EXISTS))
    }

    /// Applies a partial update to the user's character.
    ///
    /// # Returns
    /// - `Ok(Character)` - The updated character
    /// - `Err(AppError::NotFound)` - The user has no character
    pub async fn update(
        &self,
        user_id: i32,
        param: UpdateCharacterParam,
    ) -> Result<Character, AppError> {
        let character_repo = CharacterRepository::new(self.db);

        character_repo
            .update(user_id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(CHARACTER_NOT_FOUND.to_string()))
    }

    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Character, AppError> {
        let character_repo = CharacterRepository::new(self.db);

        character_repo
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(CHARACTER_NOT_FOUND.to_string()))
    }
}
