use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InvitationStatusDto {
    Pending,
    Accepted,
    Rejected,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WildCardInvitationDto {
    pub id: i32,
    pub user_id: i32,
    pub status: InvitationStatusDto,
    pub responded_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InviteDto {
    #[validate(range(min = 1))]
    pub user_id: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema, Validate)]
pub struct RespondInvitationDto {
    pub accept: bool,
}
