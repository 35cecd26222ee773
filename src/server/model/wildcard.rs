//! Wild Card invitation domain model.
//!
//! An invitation moves from `Pending` to `Accepted` or `Rejected` exactly once; the
//! only way back to `Pending` is an explicit resend, which also clears `responded_at`.

use chrono::{DateTime, Utc};
use entity::wildcard_invitation::InvitationStatus as InvitationStatusEntity;

use crate::model::wildcard::{InvitationStatusDto, WildCardInvitationDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl InvitationStatus {
    pub fn from_entity(status: InvitationStatusEntity) -> Self {
        match status {
            InvitationStatusEntity::Pending => Self::Pending,
            InvitationStatusEntity::Accepted => Self::Accepted,
            InvitationStatusEntity::Rejected => Self::Rejected,
        }
    }

    pub fn into_entity(self) -> InvitationStatusEntity {
        match self {
            Self::Pending => InvitationStatusEntity::Pending,
            Self::Accepted => InvitationStatusEntity::Accepted,
            Self::Rejected => InvitationStatusEntity::Rejected,
        }
    }

    pub fn into_dto(self) -> InvitationStatusDto {
        match self {
            Self::Pending => InvitationStatusDto::Pending,
            Self::Accepted => InvitationStatusDto::Accepted,
            Self::Rejected => InvitationStatusDto::Rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WildCardInvitation {
    pub id: i32,
    pub user_id: i32,
    pub status: InvitationStatus,
    /// `None` while pending.
    pub responded_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WildCardInvitation {
    pub fn from_entity(entity: entity::wildcard_invitation::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            status: InvitationStatus::from_entity(entity.status),
            responded_at: entity.responded_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> WildCardInvitationDto {
        WildCardInvitationDto {
            id: self.id,
            user_id: self.user_id,
            status: self.status.into_dto(),
            responded_at: self.responded_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// The invited user's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvitationResponse {
    Accept,
    Reject,
}

impl InvitationResponse {
    pub fn from_accept(accept: bool) -> Self {
        if accept {
            Self::Accept
        } else {
            Self::Reject
        }
    }

    /// Status the invitation moves to for this answer.
    pub fn resulting_status(self) -> InvitationStatus {
        match self {
            Self::Accept => InvitationStatus::Accepted,
            Self::Reject => InvitationStatus::Rejected,
        }
    }
}
