//! Messages carried over the realtime WebSocket channel.

use serde::{Deserialize, Serialize};

use crate::model::{character::CharacterDto, wildcard::WildCardInvitationDto};

/// Messages sent by the browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessageDto {
    Auth {
        #[serde(rename = "userId")]
        user_id: i32,
    },
}

/// Messages pushed by the server, serialized as `{"type": <event>, ...payload}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEventDto {
    AuthSuccess {
        #[serde(rename = "userId")]
        user_id: i32,
    },
    AuthError {
        message: String,
    },
    WildcardInvitation {
        invitation: WildCardInvitationDto,
    },
    MatchStartedCharacterIntroSequence {
        #[serde(rename = "matchId")]
        match_id: i32,
        #[serde(rename = "teamVName")]
        team_v_name: String,
        #[serde(rename = "teamZName")]
        team_z_name: String,
        characters: Vec<CharacterDto>,
    },
}
