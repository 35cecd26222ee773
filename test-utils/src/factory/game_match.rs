//! Match factory.

use chrono::Utc;
use entity::game_match::MatchStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for test matches. Defaults to a preparing "Team V" vs "Team Z" match at 0-0.
pub struct MatchFactory<'a> {
    db: &'a DatabaseConnection,
    team_v_name: String,
    team_z_name: String,
    status: MatchStatus,
}

impl<'a> MatchFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            team_v_name: "Team V".to_string(),
            team_z_name: "Team Z".to_string(),
            status: MatchStatus::Preparing,
        }
    }

    pub fn teams(mut self, team_v_name: impl Into<String>, team_z_name: impl Into<String>) -> Self {
        self.team_v_name = team_v_name.into();
        self.team_z_name = team_z_name.into();
        self
    }

    pub fn status(mut self, status: MatchStatus) -> Self {
        self.status = status;
        self
    }

    /// Inserts the match, stamping `started_at`/`ended_at` to agree with the status.
    pub async fn build(self) -> Result<entity::game_match::Model, DbErr> {
        let now = Utc::now();
        let started_at = match self.status {
            MatchStatus::Preparing => None,
            _ => Some(now),
        };
        let ended_at = match self.status {
            MatchStatus::Finished => Some(now),
            _ => None,
        };

        entity::game_match::ActiveModel {
            team_v_name: ActiveValue::Set(self.team_v_name),
            team_z_name: ActiveValue::Set(self.team_z_name),
            team_v_score: ActiveValue::Set(0),
            team_z_score: ActiveValue::Set(0),
            status: ActiveValue::Set(self.status),
            started_at: ActiveValue::Set(started_at),
            ended_at: ActiveValue::Set(ended_at),
            current_minute: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a preparing match with default team names.
pub async fn create_match(db: &DatabaseConnection) -> Result<entity::game_match::Model, DbErr> {
    MatchFactory::new(db).build().await
}
