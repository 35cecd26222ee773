//! Match flow service.
//!
//! A match moves `Preparing -> Active -> Finished`. Goals can only be recorded while
//! the match is active. Starting a match broadcasts the character intro sequence to
//! every connected user.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{character::CharacterRepository, game_match::MatchRepository, user::UserRepository},
    error::AppError,
    model::{
        event::ServerEvent,
        game_match::{
            CreateMatchParam, GameMatch, Goal, MatchStatus, MatchWithGoals, RecordGoalParam,
        },
    },
    realtime::registry::ConnectionRegistry,
};

const MATCH_NOT_FOUND: &str = "Match not found";
const MATCH_NOT_ACTIVE: &str = "Match is not active";

pub struct MatchService<'a> {
    pub db: &'a DatabaseConnection,
    pub realtime: &'a ConnectionRegistry,
}

impl<'a> MatchService<'a> {
    pub fn new(db: &'a DatabaseConnection, realtime: &'a ConnectionRegistry) -> Self {
        Self { db, realtime }
    }

    pub async fn create(&self, param: CreateMatchParam) -> Result<GameMatch, AppError> {
        let match_repo = MatchRepository::new(self.db);
        let game_match = match_repo.create(param).await?;
        Ok(game_match)
    }

    /// Starts a preparing match and broadcasts the intro sequence.
    ///
    /// The broadcast carries every character that is not eliminated. Only the caller
    /// whose transition applies broadcasts.
    ///
    /// # Returns
    /// - `Ok(GameMatch)` - The match, now active
    /// - `Err(AppError::NotFound)` - No match with that ID
    /// - `Err(AppError::BadRequest)` - The match is not preparing
    pub async fn start(&self, match_id: i32) -> Result<GameMatch, AppError> {
        let match_repo = MatchRepository::new(self.db);
        let character_repo = CharacterRepository::new(self.db);

        let Some(game_match) = match_repo
            .transition(match_id, MatchStatus::Preparing, MatchStatus::Active)
            .await?
        else {
            self.get(match_id).await?;
            return Err(AppError::BadRequest(
                "Match has already been started".to_string(),
            ));
        };

        let characters = character_repo.get_active().await?;
        let delivered = self
            .realtime
            .broadcast(ServerEvent::MatchStarted {
                game_match: game_match.clone(),
                characters,
            })
            .await;

        tracing::info!(
            "Match {} started, intro sequence sent to {} socket(s)",
            match_id,
            delivered
        );

        Ok(game_match)
    }

    /// Records a goal in an active match.
    ///
    /// # Returns
    /// - `Ok(Goal)` - The recorded goal
    /// - `Err(AppError::NotFound)` - No match with that ID, or the scorer does not exist
    /// - `Err(AppError::BadRequest)` - The match is not active
    pub async fn record_goal(
        &self,
        match_id: i32,
        param: RecordGoalParam,
    ) -> Result<Goal, AppError> {
        let match_repo = MatchRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        let game_match = self.get(match_id).await?;
        if game_match.status != MatchStatus::Active {
            return Err(AppError::BadRequest(MATCH_NOT_ACTIVE.to_string()));
        }

        if user_repo.find_by_id(param.user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        // The match may have finished since the check above.
        match_repo
            .record_goal(match_id, param)
            .await?
            .ok_or_else(|| AppError::BadRequest(MATCH_NOT_ACTIVE.to_string()))
    }

    /// Finishes an active match.
    ///
    /// # Returns
    /// - `Ok(GameMatch)` - The match, now finished
    /// - `Err(AppError::NotFound)` - No match with that ID
    /// - `Err(AppError::BadRequest)` - The match is not active
    pub async fn finish(&self, match_id: i32) -> Result<GameMatch, AppError> {
        let match_repo = MatchRepository::new(self.db);

        let Some(game_match) = match_repo
            .transition(match_id, MatchStatus::Active, MatchStatus::Finished)
            .await?
        else {
            self.get(match_id).await?;
            return Err(AppError::BadRequest(MATCH_NOT_ACTIVE.to_string()));
        };

        Ok(game_match)
    }

    /// Gets the latest match that has not finished.
    pub async fn get_current(&self) -> Result<GameMatch, AppError> {
        let match_repo = MatchRepository::new(self.db);

        match_repo
            .find_current()
            .await?
            .ok_or_else(|| AppError::NotFound("No match in progress".to_string()))
    }

    pub async fn get_with_goals(&self, match_id: i32) -> Result<MatchWithGoals, AppError> {
        let match_repo = MatchRepository::new(self.db);

        let game_match = self.get(match_id).await?;
        let goals = match_repo.get_goals(match_id).await?;

        Ok(MatchWithGoals { game_match, goals })
    }

    async fn get(&self, match_id: i32) -> Result<GameMatch, AppError> {
        let match_repo = MatchRepository::new(self.db);

        match_repo
            .find_by_id(match_id)
            .await?
            .ok_or_else(|| AppError::NotFound(MATCH_NOT_FOUND.to_string()))
    }
}
