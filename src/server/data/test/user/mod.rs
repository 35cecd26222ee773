use crate::server::{
    data::user::UserRepository,
    model::user::CreateUserParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod find_by_id_with_character;
mod find_by_username;
mod get_all_with_characters;
mod set_admin;

fn create_param(username: &str) -> CreateUserParam {
    CreateUserParam {
        username: username.to_string(),
        password_hash: "hash".to_string(),
        admin: false,
    }
}
