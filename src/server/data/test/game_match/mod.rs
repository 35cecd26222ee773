use crate::server::{
    data::{character::CharacterRepository, game_match::MatchRepository},
    model::game_match::{CreateMatchParam, MatchStatus, RecordGoalParam, Team},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_current;
mod get_goals;
mod record_goal;
mod transition;
