use crate::server::{
    data::{character::CharacterRepository, wildcard::WildCardInvitationRepository},
    model::wildcard::{InvitationResponse, InvitationStatus},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_pending;
mod create;
mod find_latest_by_user;
mod resend;
mod respond;
