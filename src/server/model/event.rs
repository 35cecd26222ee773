//! Events pushed to clients over the realtime channel.

use crate::{
    model::event::ServerEventDto,
    server::model::{character::Character, game_match::GameMatch, wildcard::WildCardInvitation},
};

#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    /// Handshake accepted for this user.
    AuthSuccess { user_id: i32 },
    /// Handshake rejected; the socket closes after this is sent.
    AuthError { message: String },
    /// An invitation was created, resent, or answered.
    WildcardInvitation(WildCardInvitation),
    /// A match went live; carries every character still in play.
    MatchStarted {
        game_match: GameMatch,
        characters: Vec<Character>,
    },
}

impl ServerEvent {
    pub fn into_dto(self) -> ServerEventDto {
        match self {
            Self::AuthSuccess { user_id } => ServerEventDto::AuthSuccess { user_id },
            Self::AuthError { message } => ServerEventDto::AuthError { message },
            Self::WildcardInvitation(invitation) => ServerEventDto::WildcardInvitation {
                invitation: invitation.into_dto(),
            },
            Self::MatchStarted {
                game_match,
                characters,
            } => ServerEventDto::MatchStartedCharacterIntroSequence {
                match_id: game_match.id,
                team_v_name: game_match.team_v_name,
                team_z_name: game_match.team_z_name,
                characters: characters.into_iter().map(Character::into_dto).collect(),
            },
        }
    }

    /// Serializes the event to the JSON text frame sent to clients.
    pub fn to_message(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.clone().into_dto())
    }
}
