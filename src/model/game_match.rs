use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatusDto {
    Preparing,
    Active,
    Finished,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
pub enum TeamDto {
    V,
    Z,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    pub id: i32,
    pub team_v_name: String,
    pub team_z_name: String,
    pub team_v_score: i32,
    pub team_z_score: i32,
    pub status: MatchStatusDto,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub current_minute: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GoalDto {
    pub id: i32,
    pub match_id: i32,
    pub user_id: i32,
    pub team: TeamDto,
    pub minute: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchWithGoalsDto {
    #[serde(flatten)]
    pub game_match: MatchDto,
    pub goals: Vec<GoalDto>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchDto {
    #[validate(length(min = 1, max = 50))]
    pub team_v_name: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub team_z_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecordGoalDto {
    #[validate(range(min = 1))]
    pub user_id: i32,
    pub team: TeamDto,
    #[validate(range(min = 0, max = 130))]
    pub minute: i32,
}
