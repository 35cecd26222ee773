//! Match and goal data repository.
//!
//! Status changes and goals are conditional updates on the match row, so a match only
//! moves forward and only an active match takes goals. Recording a goal writes the
//! match row, the goal row, and the scorer's character in one transaction.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ExprTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::game_match::{
    CreateMatchParam, GameMatch, Goal, MatchStatus, RecordGoalParam, Team,
};

pub struct MatchRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a match in the `Preparing` state with both scores at zero.
    pub async fn create(&self, param: CreateMatchParam) -> Result<GameMatch, DbErr> {
        let entity = entity::game_match::ActiveModel {
            team_v_name: ActiveValue::Set(param.team_v_name),
            team_z_name: ActiveValue::Set(param.team_z_name),
            team_v_score: ActiveValue::Set(0),
            team_z_score: ActiveValue::Set(0),
            status: ActiveValue::Set(MatchStatus::Preparing.into_entity()),
            started_at: ActiveValue::Set(None),
            ended_at: ActiveValue::Set(None),
            current_minute: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(GameMatch::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<GameMatch>, DbErr> {
        let entity = entity::prelude::GameMatch::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(GameMatch::from_entity))
    }

    /// Finds the most recently created match that has not finished.
    pub async fn find_current(&self) -> Result<Option<GameMatch>, DbErr> {
        let entity = entity::prelude::GameMatch::find()
            .filter(
                entity::game_match::Column::Status
                    .ne(MatchStatus::Finished.into_entity()),
            )
            .order_by_desc(entity::game_match::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(GameMatch::from_entity))
    }

    /// Moves a match from `from` to `to` in a single conditional update.
    ///
    /// Entering `Active` stamps `started_at`; entering `Finished` stamps `ended_at`.
    /// Returns `Ok(None)` if no match has that ID or the match is no longer in `from`,
    /// so of two concurrent transitions only one applies.
    pub async fn transition(
        &self,
        id: i32,
        from: MatchStatus,
        to: MatchStatus,
    ) -> Result<Option<GameMatch>, DbErr> {
        let txn = self.db.begin().await?;

        let now = Utc::now();
        let mut update = entity::prelude::GameMatch::update_many()
            .col_expr(
                entity::game_match::Column::Status,
                Expr::value(to.into_entity()),
            )
            .filter(entity::game_match::Column::Id.eq(id))
            .filter(entity::game_match::Column::Status.eq(from.into_entity()));
        match to {
            MatchStatus::Active => {
                update = update.col_expr(entity::game_match::Column::StartedAt, Expr::value(now))
            }
            MatchStatus::Finished => {
                update = update.col_expr(entity::game_match::Column::EndedAt, Expr::value(now))
            }
            MatchStatus::Preparing => {}
        }

        if update.exec(&txn).await?.rows_affected == 0 {
            return Ok(None);
        }

        let game_match = entity::prelude::GameMatch::find_by_id(id).one(&txn).await?;

        txn.commit().await?;

        Ok(game_match.map(GameMatch::from_entity))
    }

    /// Records a goal and applies its effects atomically.
    ///
    /// Increments the scoring team's score and advances the match clock to `minute` if
    /// it is later than the current one, but only while the match is active. Then
    /// inserts the goal row and increments the scorer's character goal counter when
    /// they own a character. Counters are incremented in SQL, never read back first.
    ///
    /// # Returns
    /// - `Ok(Some(Goal))` - The recorded goal
    /// - `Ok(None)` - No active match has that ID; nothing was written
    /// - `Err(DbErr)` - Database error; nothing was written
    pub async fn record_goal(
        &self,
        match_id: i32,
        param: RecordGoalParam,
    ) -> Result<Option<Goal>, DbErr> {
        let txn = self.db.begin().await?;

        let score = match param.team {
            Team::V => entity::game_match::Column::TeamVScore,
            Team::Z => entity::game_match::Column::TeamZScore,
        };

        let updated = entity::prelude::GameMatch::update_many()
            .col_expr(score, Expr::col(score).add(1))
            .col_expr(
                entity::game_match::Column::CurrentMinute,
                Func::greatest([
                    Expr::col(entity::game_match::Column::CurrentMinute),
                    Expr::val(param.minute),
                ])
                .into(),
            )
            .filter(entity::game_match::Column::Id.eq(match_id))
            .filter(
                entity::game_match::Column::Status.eq(MatchStatus::Active.into_entity()),
            )
            .exec(&txn)
            .await?;

        if updated.rows_affected == 0 {
            return Ok(None);
        }

        let now = Utc::now();

        let goal = entity::goal::ActiveModel {
            match_id: ActiveValue::Set(match_id),
            user_id: ActiveValue::Set(param.user_id),
            team: ActiveValue::Set(param.team.into_entity()),
            minute: ActiveValue::Set(param.minute),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        entity::prelude::Character::update_many()
            .col_expr(
                entity::character::Column::Goals,
                Expr::col(entity::character::Column::Goals).add(1),
            )
            .col_expr(entity::character::Column::UpdatedAt, Expr::value(now))
            .filter(entity::character::Column::UserId.eq(param.user_id))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(Some(Goal::from_entity(goal)))
    }

    /// Gets the goals of a match in the order they were recorded.
    pub async fn get_goals(&self, match_id: i32) -> Result<Vec<Goal>, DbErr> {
        let entities = entity::prelude::Goal::find()
            .filter(entity::goal::Column::MatchId.eq(match_id))
            .order_by_asc(entity::goal::Column::Minute)
            .order_by_asc(entity::goal::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Goal::from_entity).collect())
    }
}
