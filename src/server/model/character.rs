//! Character domain models and parameters.
//!
//! A character is the single game persona owned by a user. Creation fills progression
//! fields with their defaults; updates are partial and only touch the fields provided.

use chrono::{DateTime, Utc};

use crate::model::character::{CharacterDto, CreateCharacterDto, UpdateCharacterDto};

/// Ranking assigned to new characters. Lower is better.
pub const DEFAULT_RANKING: i32 = 299;
/// Value used for any of the six stats omitted at creation.
pub const DEFAULT_STAT: i32 = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub position: String,
    pub age: Option<i32>,
    pub height: Option<i32>,
    pub bio: Option<String>,
    pub player_class: Option<String>,
    pub subclass: Option<String>,
    pub weapon: Option<String>,
    pub motivation: Option<String>,
    pub origin: Option<String>,
    pub avatar: Option<String>,
    pub level: i32,
    pub experience: i32,
    pub matches: i32,
    pub goals: i32,
    pub ranking: i32,
    pub is_eliminated: bool,
    pub stats: CharacterStats,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The six 0-100 attributes shown on the radar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterStats {
    pub speed: i32,
    pub strength: i32,
    pub stamina: i32,
    pub shooting: i32,
    pub passing: i32,
    pub dribbling: i32,
}

impl Character {
    pub fn from_entity(entity: entity::character::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            position: entity.position,
            age: entity.age,
            height: entity.height,
            bio: entity.bio,
            player_class: entity.player_class,
            subclass: entity.subclass,
            weapon: entity.weapon,
            motivation: entity.motivation,
            origin: entity.origin,
            avatar: entity.avatar,
            level: entity.level,
            experience: entity.experience,
            matches: entity.matches,
            goals: entity.goals,
            ranking: entity.ranking,
            is_eliminated: entity.is_eliminated,
            stats: CharacterStats {
                speed: entity.speed,
                strength: entity.strength,
                stamina: entity.stamina,
                shooting: entity.shooting,
                passing: entity.passing,
                dribbling: entity.dribbling,
            },
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> CharacterDto {
        CharacterDto {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            position: self.position,
            age: self.age,
            height: self.height,
            bio: self.bio,
            player_class: self.player_class,
            subclass: self.subclass,
            weapon: self.weapon,
            motivation: self.motivation,
            origin: self.origin,
            avatar: self.avatar,
            level: self.level,
            experience: self.experience,
            matches: self.matches,
            goals: self.goals,
            ranking: self.ranking,
            is_eliminated: self.is_eliminated,
            speed: self.stats.speed,
            strength: self.stats.strength,
            stamina: self.stats.stamina,
            shooting: self.stats.shooting,
            passing: self.stats.passing,
            dribbling: self.stats.dribbling,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a character for a user.
#[derive(Debug, Clone)]
pub struct CreateCharacterParam {
    pub user_id: i32,
    pub name: String,
    pub position: String,
    pub age: Option<i32>,
    pub height: Option<i32>,
    pub bio: Option<String>,
    pub player_class: Option<String>,
    pub subclass: Option<String>,
    pub weapon: Option<String>,
    pub motivation: Option<String>,
    pub origin: Option<String>,
    pub avatar: Option<String>,
    pub stats: CharacterStats,
}

impl CreateCharacterParam {
    /// Builds creation parameters from the request body, filling omitted stats with
    /// `DEFAULT_STAT`.
    pub fn from_dto(user_id: i32, dto: CreateCharacterDto) -> Self {
        Self {
            user_id,
            name: dto.name,
            position: dto.position,
            age: dto.age,
            height: dto.height,
            bio: dto.bio,
            player_class: dto.player_class,
            subclass: dto.subclass,
            weapon: dto.weapon,
            motivation: dto.motivation,
            origin: dto.origin,
            avatar: dto.avatar,
            stats: CharacterStats {
                speed: dto.speed.unwrap_or(DEFAULT_STAT),
                strength: dto.strength.unwrap_or(DEFAULT_STAT),
                stamina: dto.stamina.unwrap_or(DEFAULT_STAT),
                shooting: dto.shooting.unwrap_or(DEFAULT_STAT),
                passing: dto.passing.unwrap_or(DEFAULT_STAT),
                dribbling: dto.dribbling.unwrap_or(DEFAULT_STAT),
            },
        }
    }
}

/// Partial update; `None` leaves the stored value as it is. Optional sheet fields take
/// `Some(None)` to clear them.
#[derive(Debug, Clone, Default)]
pub struct UpdateCharacterParam {
    pub name: Option<String>,
    pub position: Option<String>,
    pub age: Option<Option<i32>>,
    pub height: Option<Option<i32>>,
    pub bio: Option<Option<String>>,
    pub player_class: Option<Option<String>>,
    pub subclass: Option<Option<String>>,
    pub weapon: Option<Option<String>>,
    pub motivation: Option<Option<String>>,
    pub origin: Option<Option<String>>,
    pub avatar: Option<Option<String>>,
    pub speed: Option<i32>,
    pub strength: Option<i32>,
    pub stamina: Option<i32>,
    pub shooting: Option<i32>,
    pub passing: Option<i32>,
    pub dribbling: Option<i32>,
}

impl From<UpdateCharacterDto> for UpdateCharacterParam {
    fn from(dto: UpdateCharacterDto) -> Self {
        Self {
            name: dto.name,
            position: dto.position,
            age: dto.age,
            height: dto.height,
            bio: dto.bio,
            player_class: dto.player_class,
            subclass: dto.subclass,
            weapon: dto.weapon,
            motivation: dto.motivation,
            origin: dto.origin,
            avatar: dto.avatar,
            speed: dto.speed,
            strength: dto.strength,
            stamina: dto.stamina,
            shooting: dto.shooting,
            passing: dto.passing,
            dribbling: dto.dribbling,
        }
    }
}
