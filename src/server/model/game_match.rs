//! Match and goal domain models.

use chrono::{DateTime, Utc};
use entity::{game_match::MatchStatus as MatchStatusEntity, goal::Team as TeamEntity};

use crate::model::game_match::{
    CreateMatchDto, GoalDto, MatchDto, MatchStatusDto, MatchWithGoalsDto, RecordGoalDto, TeamDto,
};

pub const DEFAULT_TEAM_V_NAME: &str = "Team V";
pub const DEFAULT_TEAM_Z_NAME: &str = "Team Z";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    Preparing,
    Active,
    Finished,
}

impl MatchStatus {
    pub fn from_entity(status: MatchStatusEntity) -> Self {
        match status {
            MatchStatusEntity::Preparing => Self::Preparing,
            MatchStatusEntity::Active => Self::Active,
            MatchStatusEntity::Finished => Self::Finished,
        }
    }

    pub fn into_entity(self) -> MatchStatusEntity {
        match self {
            Self::Preparing => MatchStatusEntity::Preparing,
            Self::Active => MatchStatusEntity::Active,
            Self::Finished => MatchStatusEntity::Finished,
        }
    }

    pub fn into_dto(self) -> MatchStatusDto {
        match self {
            Self::Preparing => MatchStatusDto::Preparing,
            Self::Active => MatchStatusDto::Active,
            Self::Finished => MatchStatusDto::Finished,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    V,
    Z,
}

impl Team {
    pub fn from_entity(team: TeamEntity) -> Self {
        match team {
            TeamEntity::V => Self::V,
            TeamEntity::Z => Self::Z,
        }
    }

    pub fn into_entity(self) -> TeamEntity {
        match self {
            Self::V => TeamEntity::V,
            Self::Z => TeamEntity::Z,
        }
    }

    pub fn into_dto(self) -> TeamDto {
        match self {
            Self::V => TeamDto::V,
            Self::Z => TeamDto::Z,
        }
    }
}

impl From<TeamDto> for Team {
    fn from(dto: TeamDto) -> Self {
        match dto {
            TeamDto::V => Self::V,
            TeamDto::Z => Self::Z,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameMatch {
    pub id: i32,
    pub team_v_name: String,
    pub team_z_name: String,
    pub team_v_score: i32,
    pub team_z_score: i32,
    pub status: MatchStatus,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub current_minute: i32,
    pub created_at: DateTime<Utc>,
}

impl GameMatch {
    pub fn from_entity(entity: entity::game_match::Model) -> Self {
        Self {
            id: entity.id,
            team_v_name: entity.team_v_name,
            team_z_name: entity.team_z_name,
            team_v_score: entity.team_v_score,
            team_z_score: entity.team_z_score,
            status: MatchStatus::from_entity(entity.status),
            started_at: entity.started_at,
            ended_at: entity.ended_at,
            current_minute: entity.current_minute,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> MatchDto {
        MatchDto {
            id: self.id,
            team_v_name: self.team_v_name,
            team_z_name: self.team_z_name,
            team_v_score: self.team_v_score,
            team_z_score: self.team_z_score,
            status: self.status.into_dto(),
            started_at: self.started_at,
            ended_at: self.ended_at,
            current_minute: self.current_minute,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    pub id: i32,
    pub match_id: i32,
    pub user_id: i32,
    pub team: Team,
    pub minute: i32,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    pub fn from_entity(entity: entity::goal::Model) -> Self {
        Self {
            id: entity.id,
            match_id: entity.match_id,
            user_id: entity.user_id,
            team: Team::from_entity(entity.team),
            minute: entity.minute,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> GoalDto {
        GoalDto {
            id: self.id,
            match_id: self.match_id,
            user_id: self.user_id,
            team: self.team.into_dto(),
            minute: self.minute,
            created_at: self.created_at,
        }
    }
}

/// A match with every goal scored in it, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchWithGoals {
    pub game_match: GameMatch,
    pub goals: Vec<Goal>,
}

impl MatchWithGoals {
    pub fn into_dto(self) -> MatchWithGoalsDto {
        MatchWithGoalsDto {
            game_match: self.game_match.into_dto(),
            goals: self.goals.into_iter().map(Goal::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMatchParam {
    pub team_v_name: String,
    pub team_z_name: String,
}

impl From<CreateMatchDto> for CreateMatchParam {
    fn from(dto: CreateMatchDto) -> Self {
        Self {
            team_v_name: dto
                .team_v_name
                .unwrap_or_else(|| DEFAULT_TEAM_V_NAME.to_string()),
            team_z_name: dto
                .team_z_name
                .unwrap_or_else(|| DEFAULT_TEAM_Z_NAME.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordGoalParam {
    pub user_id: i32,
    pub team: Team,
    pub minute: i32,
}

impl From<RecordGoalDto> for RecordGoalParam {
    fn from(dto: RecordGoalDto) -> Self {
        Self {
            user_id: dto.user_id,
            team: Team::from(dto.team),
            minute: dto.minute,
        }
    }
}
