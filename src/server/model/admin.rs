use crate::model::admin::AdminStatsDto;

/// Aggregate counts shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminStats {
    /// Number of characters.
    pub total_players: u64,
    /// Characters that are not eliminated.
    pub active_players: u64,
    pub eliminated_players: u64,
    /// Sum of the goal counters of every character.
    pub total_goals: i64,
    pub pending_invitations: u64,
}

impl AdminStats {
    pub fn into_dto(self) -> AdminStatsDto {
        AdminStatsDto {
            total_players: self.total_players,
            active_players: self.active_players,
            eliminated_players: self.eliminated_players,
            total_goals: self.total_goals,
            pending_invitations: self.pending_invitations,
        }
    }
}
