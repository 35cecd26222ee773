use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatsDto {
    pub total_players: u64,
    pub active_players: u64,
    pub eliminated_players: u64,
    pub total_goals: i64,
    pub pending_invitations: u64,
}
