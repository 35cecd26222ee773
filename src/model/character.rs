use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDto {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub position: String,
    pub age: Option<i32>,
    pub height: Option<i32>,
    pub bio: Option<String>,
    #[serde(rename = "class")]
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
    pub speed: i32,
    pub strength: i32,
    pub stamina: i32,
    pub shooting: i32,
    pub passing: i32,
    pub dribbling: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Character sheet submitted by the character-creation flow.
///
/// Only `name` and `position` are required; stats default to 50.
#[derive(Debug, Serialize, Deserialize, Clone, Default, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCharacterDto {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(length(min = 1, max = 30))]
    pub position: String,
    #[validate(range(min = 1, max = 120))]
    pub age: Option<i32>,
    #[validate(range(min = 50, max = 250))]
    pub height: Option<i32>,
    #[validate(length(max = 2000))]
    pub bio: Option<String>,
    #[serde(rename = "class")]
    #[validate(length(max = 50))]
    pub player_class: Option<String>,
    #[validate(length(max = 50))]
    pub subclass: Option<String>,
    #[validate(length(max = 50))]
    pub weapon: Option<String>,
    #[validate(length(max = 500))]
    pub motivation: Option<String>,
    #[validate(length(max = 100))]
    pub origin: Option<String>,
    #[validate(length(max = 500))]
    pub avatar: Option<String>,
    #[validate(range(min = 0, max = 100))]
    pub speed: Option<i32>,
    #[validate(range(min = 0, max = 100))]
    pub strength: Option<i32>,
    #[validate(range(min = 0, max = 100))]
    pub stamina: Option<i32>,
    #[validate(range(min = 0, max = 100))]
    pub shooting: Option<i32>,
    #[validate(range(min = 0, max = 100))]
    pub passing: Option<i32>,
    #[validate(range(min = 0, max = 100))]
    pub dribbling: Option<i32>,
}

/// Partial character update. Absent fields are left untouched; an explicit `null`
/// clears an optional sheet field.
#[derive(Debug, Serialize, Deserialize, Clone, Default, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCharacterDto {
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 30))]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<i32>)]
    #[validate(range(min = 1, max = 120))]
    pub age: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<i32>)]
    #[validate(range(min = 50, max = 250))]
    pub height: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 2000))]
    pub bio: Option<Option<String>>,
    #[serde(rename = "class", default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 50))]
    pub player_class: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 50))]
    pub subclass: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 50))]
    pub weapon: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 500))]
    pub motivation: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 100))]
    pub origin: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 500))]
    pub avatar: Option<Option<String>>,
    #[validate(range(min = 0, max = 100))]
    pub speed: Option<i32>,
    #[validate(range(min = 0, max = 100))]
    pub strength: Option<i32>,
    #[validate(range(min = 0, max = 100))]
    pub stamina: Option<i32>,
    #[validate(range(min = 0, max = 100))]
    pub shooting: Option<i32>,
    #[validate(range(min = 0, max = 100))]
    pub passing: Option<i32>,
    #[validate(range(min = 0, max = 100))]
    pub dribbling: Option<i32>,
}

/// Maps a present field to `Some`, so `null` becomes `Some(None)` and an absent field
/// stays `None` through `#[serde(default)]`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
