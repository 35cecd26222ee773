//! Character factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Builder for test characters. The owning user must already exist.
///
/// # Example
///
/// ```rust,ignore
/// let character = CharacterFactory::new(&db, user.id)
///     .name("Bachira")
///     .eliminated(true)
///     .build()
///     .await?;
/// ```
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
    position: String,
    ranking: i32,
    goals: i32,
    is_eliminated: bool,
    speed: i32,
}

impl<'a> CharacterFactory<'a> {
    /// Creates a factory with defaults: name `"Striker {n}"`, position `"FW"`,
    /// ranking 299, no goals, not eliminated, all stats 50.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            name: format!("Striker {}", next_id()),
            position: "FW".to_string(),
            ranking: 299,
            goals: 0,
            is_eliminated: false,
            speed: 50,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    pub fn ranking(mut self, ranking: i32) -> Self {
        self.ranking = ranking;
        self
    }

    pub fn goals(mut self, goals: i32) -> Self {
        self.goals = goals;
        self
    }

    pub fn eliminated(mut self, is_eliminated: bool) -> Self {
        self.is_eliminated = is_eliminated;
        self
    }

    pub fn speed(mut self, speed: i32) -> Self {
        self.speed = speed;
        self
    }

    /// Inserts the character.
    ///
    /// # Returns
    /// - `Ok(entity::character::Model)` - Created character
    /// - `Err(DbErr)` - Insert failed, e.g. the user already owns a character
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        let now = Utc::now();
        entity::character::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            position: ActiveValue::Set(self.position),
            age: ActiveValue::Set(None),
            height: ActiveValue::Set(None),
            bio: ActiveValue::Set(None),
            player_class: ActiveValue::Set(None),
            subclass: ActiveValue::Set(None),
            weapon: ActiveValue::Set(None),
            motivation: ActiveValue::Set(None),
            origin: ActiveValue::Set(None),
            avatar: ActiveValue::Set(None),
            level: ActiveValue::Set(1),
            experience: ActiveValue::Set(0),
            matches: ActiveValue::Set(0),
            goals: ActiveValue::Set(self.goals),
            ranking: ActiveValue::Set(self.ranking),
            is_eliminated: ActiveValue::Set(self.is_eliminated),
            speed: ActiveValue::Set(self.speed),
            strength: ActiveValue::Set(50),
            stamina: ActiveValue::Set(50),
            shooting: ActiveValue::Set(50),
            passing: ActiveValue::Set(50),
            dribbling: ActiveValue::Set(50),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a default character for `user_id`.
pub async fn create_character(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db, user_id).build().await
}
