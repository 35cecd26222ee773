use crate::server::{
    data::character::CharacterRepository,
    model::character::{CharacterStats, CreateCharacterParam, UpdateCharacterParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count;
mod create;
mod get_by_elimination;
mod set_eliminated;
mod total_goals;
mod update;

fn create_param(user_id: i32, name: &str) -> CreateCharacterParam {
    CreateCharacterParam {
        user_id,
        name: name.to_string(),
        position: "FW".to_string(),
        age: Some(17),
        height: None,
        bio: None,
        player_class: None,
        subclass: None,
        weapon: None,
        motivation: None,
        origin: None,
        avatar: None,
        stats: CharacterStats {
            speed: 80,
            strength: 50,
            stamina: 50,
            shooting: 50,
            passing: 50,
            dribbling: 50,
        },
    }
}
