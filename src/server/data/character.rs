//! Character data repository.
//!
//! Characters are keyed by their owning user: every lookup and mutation here takes a
//! user ID, mirroring the one-character-per-user rule enforced by the unique index on
//! `characters.user_id`.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::character::{
    Character, CreateCharacterParam, UpdateCharacterParam, DEFAULT_RANKING,
};

pub struct CharacterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a character with default progression values.
    ///
    /// Fails with a unique constraint violation if the user already owns a character.
    pub async fn create(&self, param: CreateCharacterParam) -> Result<Character, DbErr> {
        let now = Utc::now();

        let entity = entity::character::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            name: ActiveValue::Set(param.name),
            position: ActiveValue::Set(param.position),
            age: ActiveValue::Set(param.age),
            height: ActiveValue::Set(param.height),
            bio: ActiveValue::Set(param.bio),
            player_class: ActiveValue::Set(param.player_class),
            subclass: ActiveValue::Set(param.subclass),
            weapon: ActiveValue::Set(param.weapon),
            motivation: ActiveValue::Set(param.motivation),
            origin: ActiveValue::Set(param.origin),
            avatar: ActiveValue::Set(param.avatar),
            level: ActiveValue::Set(1),
            experience: ActiveValue::Set(0),
            matches: ActiveValue::Set(0),
            goals: ActiveValue::Set(0),
            ranking: ActiveValue::Set(DEFAULT_RANKING),
            is_eliminated: ActiveValue::Set(false),
            speed: ActiveValue::Set(param.stats.speed),
            strength: ActiveValue::Set(param.stats.strength),
            stamina: ActiveValue::Set(param.stats.stamina),
            shooting: ActiveValue::Set(param.stats.shooting),
            passing: ActiveValue::Set(param.stats.passing),
            dribbling: ActiveValue::Set(param.stats.dribbling),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Character::from_entity(entity))
    }

    /// Finds the character owned by a user.
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Character>, DbErr> {
        let entity = entity::prelude::Character::find()
            .filter(entity::character::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Character::from_entity))
    }

    /// Applies a partial update to the user's character.
    ///
    /// Returns `Ok(None)` if the user has no character.
    pub async fn update(
        &self,
        user_id: i32,
        param: UpdateCharacterParam,
    ) -> Result<Option<Character>, DbErr> {
        let Some(character) = entity::prelude::Character::find()
            .filter(entity::character::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::character::ActiveModel = character.into();

        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(position) = param.position {
            active_model.position = ActiveValue::Set(position);
        }
        if let Some(age) = param.age {
            active_model.age = ActiveValue::Set(age);
        }
        if let Some(height) = param.height {
            active_model.height = ActiveValue::Set(height);
        }
        if let Some(bio) = param.bio {
            active_model.bio = ActiveValue::Set(bio);
        }
        if let Some(player_class) = param.player_class {
            active_model.player_class = ActiveValue::Set(player_class);
        }
        if let Some(subclass) = param.subclass {
            active_model.subclass = ActiveValue::Set(subclass);
        }
        if let Some(weapon) = param.weapon {
            active_model.weapon = ActiveValue::Set(weapon);
        }
        if let Some(motivation) = param.motivation {
            active_model.motivation = ActiveValue::Set(motivation);
        }
        if let Some(origin) = param.origin {
            active_model.origin = ActiveValue::Set(origin);
        }
        if let Some(avatar) = param.avatar {
            active_model.avatar = ActiveValue::Set(avatar);
        }
        if let Some(speed) = param.speed {
            active_model.speed = ActiveValue::Set(speed);
        }
        if let Some(strength) = param.strength {
            active_model.strength = ActiveValue::Set(strength);
        }
        if let Some(stamina) = param.stamina {
            active_model.stamina = ActiveValue::Set(stamina);
        }
        if let Some(shooting) = param.shooting {
            active_model.shooting = ActiveValue::Set(shooting);
        }
        if let Some(passing) = param.passing {
            active_model.passing = ActiveValue::Set(passing);
        }
        if let Some(dribbling) = param.dribbling {
            active_model.dribbling = ActiveValue::Set(dribbling);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Character::from_entity(entity)))
    }

    /// Sets the elimination flag on the user's character.
    ///
    /// Returns `Ok(None)` if the user has no character.
    pub async fn set_eliminated(
        &self,
        user_id: i32,
        is_eliminated: bool,
    ) -> Result<Option<Character>, DbErr> {
        let Some(character) = entity::prelude::Character::find()
            .filter(entity::character::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::character::ActiveModel = character.into();
        active_model.is_eliminated = ActiveValue::Set(is_eliminated);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Character::from_entity(entity)))
    }

    /// Gets all eliminated characters, best ranking first.
    pub async fn get_eliminated(&self) -> Result<Vec<Character>, DbErr> {
        self.get_by_elimination(true).await
    }

    /// Gets all characters still in play, best ranking first.
    pub async fn get_active(&self) -> Result<Vec<Character>, DbErr> {
        self.get_by_elimination(false).await
    }

    async fn get_by_elimination(&self, is_eliminated: bool) -> Result<Vec<Character>, DbErr> {
        let entities = entity::prelude::Character::find()
            .filter(entity::character::Column::IsEliminated.eq(is_eliminated))
            .order_by_asc(entity::character::Column::Ranking)
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Character::from_entity).collect())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Character::find().count(self.db).await
    }

    pub async fn count_active(&self) -> Result<u64, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::IsEliminated.eq(false))
            .count(self.db)
            .await
    }

    /// Sums the goal counters of every character. Zero when there are no characters.
    pub async fn total_goals(&self) -> Result<i64, DbErr> {
        let total = entity::prelude::Character::find()
            .select_only()
            .column_as(
                Expr::from(Func::sum(Expr::col(entity::character::Column::Goals))),
                "total",
            )
            .into_tuple::<Option<i64>>()
            .one(self.db)
            .await?;

        Ok(total.flatten().unwrap_or(0))
    }
}
