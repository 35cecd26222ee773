//! Wild-card invitation factory.

use chrono::Utc;
use entity::wildcard_invitation::InvitationStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for test invitations. Defaults to a pending, unanswered invitation.
pub struct WildCardInvitationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    status: InvitationStatus,
}

impl<'a> WildCardInvitationFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            status: InvitationStatus::Pending,
        }
    }

    pub fn status(mut self, status: InvitationStatus) -> Self {
        self.status = status;
        self
    }

    /// Inserts the invitation. Non-pending invitations get `responded_at` set to now.
    pub async fn build(self) -> Result<entity::wildcard_invitation::Model, DbErr> {
        let now = Utc::now();
        let responded_at = match self.status {
            InvitationStatus::Pending => None,
            _ => Some(now),
        };

        entity::wildcard_invitation::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            status: ActiveValue::Set(self.status),
            responded_at: ActiveValue::Set(responded_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending invitation for `user_id`.
pub async fn create_invitation(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::wildcard_invitation::Model, DbErr> {
    WildCardInvitationFactory::new(db, user_id).build().await
}
