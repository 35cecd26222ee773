//! Wild Card invitation workflow.
//!
//! An admin invites the owner of an eliminated character. The invited user answers
//! once; accepting reinstates their character. Inviting a user who already has an
//! invitation resends it, which puts it back to pending. Every state change is pushed
//! to the invited user's open sockets.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{character::CharacterRepository, wildcard::WildCardInvitationRepository},
    error::AppError,
    model::{
        event::ServerEvent,
        wildcard::{InvitationResponse, InvitationStatus, WildCardInvitation},
    },
    realtime::registry::ConnectionRegistry,
};

const INVITATION_NOT_FOUND: &str = "Invitation not found";
const ALREADY_ANSWERED: &str = "Invitation has already been answered";

pub struct WildCardService<'a> {
    pub db: &'a DatabaseConnection,
    pub realtime: &'a ConnectionRegistry,
}

impl<'a> WildCardService<'a> {
    pub fn new(db: &'a DatabaseConnection, realtime: &'a ConnectionRegistry) -> Self {
        Self { db, realtime }
    }

    /// Invites the owner of an eliminated character.
    ///
    /// # Arguments
    /// - `user_id` - User to invite
    ///
    /// # Returns
    /// - `Ok(WildCardInvitation)` - The new or resent invitation, now pending
    /// - `Err(AppError::NotFound)` - The user has no character
    /// - `Err(AppError::BadRequest)` - The character is not eliminated
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn invite(&self, user_id: i32) -> Result<WildCardInvitation, AppError> {
        let character_repo = CharacterRepository::new(self.db);
        let invitation_repo = WildCardInvitationRepository::new(self.db);

        let Some(character) = character_repo.find_by_user_id(user_id).await? else {
            return Err(AppError::NotFound("Character not found".to_string()));
        };

        if !character.is_eliminated {
            return Err(AppError::BadRequest(
                "Only eliminated characters can receive a Wild Card invitation".to_string(),
            ));
        }

        let invitation = match invitation_repo.find_latest_by_user(user_id).await? {
            Some(existing) => invitation_repo
                .resend(existing.id)
                .await?
                .ok_or_else(|| AppError::NotFound(INVITATION_NOT_FOUND.to_string()))?,
            None => invitation_repo.create(user_id).await?,
        };

        self.notify(&invitation).await;

        Ok(invitation)
    }

    /// Gets the user's latest invitation.
    pub async fn get_for_user(&self, user_id: i32) -> Result<WildCardInvitation, AppError> {
        let invitation_repo = WildCardInvitationRepository::new(self.db);

        invitation_repo
            .find_latest_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(INVITATION_NOT_FOUND.to_string()))
    }

    /// Records the user's answer to their pending invitation.
    ///
    /// # Returns
    /// - `Ok(WildCardInvitation)` - The answered invitation
    /// - `Err(AppError::NotFound)` - The user has no invitation
    /// - `Err(AppError::BadRequest)` - The invitation was already answered
    /// - `Err(AppError::DbErr)` - Database error; nothing was written
    pub async fn respond(
        &self,
        user_id: i32,
        response: InvitationResponse,
    ) -> Result<WildCardInvitation, AppError> {
        let invitation_repo = WildCardInvitationRepository::new(self.db);

        let invitation = self.get_for_user(user_id).await?;

        if invitation.status != InvitationStatus::Pending {
            return Err(AppError::BadRequest(ALREADY_ANSWERED.to_string()));
        }

        // A concurrent answer may have landed since the check above.
        let invitation = invitation_repo
            .respond(invitation.id, response)
            .await?
            .ok_or_else(|| AppError::BadRequest(ALREADY_ANSWERED.to_string()))?;

        tracing::info!(
            "User {} answered Wild Card invitation {}: {:?}",
            user_id,
            invitation.id,
            response
        );

        self.notify(&invitation).await;

        Ok(invitation)
    }

    /// Lists every invitation, newest first.
    pub async fn get_all(&self) -> Result<Vec<WildCardInvitation>, AppError> {
        let invitation_repo = WildCardInvitationRepository::new(self.db);
        let invitations = invitation_repo.get_all().await?;
        Ok(invitations)
    }

    async fn notify(&self, invitation: &WildCardInvitation) {
        let delivered = self
            .realtime
            .send_to_user(
                invitation.user_id,
                ServerEvent::WildcardInvitation(invitation.clone()),
            )
            .await;

        tracing::debug!(
            "Pushed invitation {} to {} socket(s) of user {}",
            invitation.id,
            delivered,
            invitation.user_id
        );
    }
}
