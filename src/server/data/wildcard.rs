//! Wild Card invitation data repository.
//!
//! Status changes always write `status`, `responded_at`, and `updated_at` in the same
//! statement so an invitation is never observed half-updated. An answer only applies
//! to a pending invitation. Accepting an invitation also reinstates the invited
//! user's character inside the same transaction.

use chrono::Utc;
use entity::wildcard_invitation::InvitationStatus as InvitationStatusEntity;
use sea_orm::{
    sea_query::Expr,
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::wildcard::{InvitationResponse, WildCardInvitation};

/// Repository providing database operations for Wild Card invitations.
pub struct WildCardInvitationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WildCardInvitationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pending invitation for a user.
    ///
    /// # Returns
    /// - `Ok(WildCardInvitation)` - The new invitation with `responded_at` unset
    /// - `Err(DbErr)` - Database error, including a foreign key violation for unknown users
    pub async fn create(&self, user_id: i32) -> Result<WildCardInvitation, DbErr> {
        let now = Utc::now();

        let entity = entity::wildcard_invitation::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            status: ActiveValue::Set(InvitationStatusEntity::Pending),
            responded_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(WildCardInvitation::from_entity(entity))
    }

    /// Finds the most recently created invitation for a user.
    ///
    /// # Returns
    /// - `Ok(Some(WildCardInvitation))` - The user's latest invitation
    /// - `Ok(None)` - The user has never been invited
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_latest_by_user(
        &self,
        user_id: i32,
    ) -> Result<Option<WildCardInvitation>, DbErr> {
        let entity = entity::prelude::WildcardInvitation::find()
            .filter(entity::wildcard_invitation::Column::UserId.eq(user_id))
            .order_by_desc(entity::wildcard_invitation::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(WildCardInvitation::from_entity))
    }

    /// Gets all invitations, newest first.
    pub async fn get_all(&self) -> Result<Vec<WildCardInvitation>, DbErr> {
        let entities = entity::prelude::WildcardInvitation::find()
            .order_by_desc(entity::wildcard_invitation::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(WildCardInvitation::from_entity)
            .collect())
    }

    /// Records the invited user's answer.
    ///
    /// Sets the resulting status and `responded_at`, but only while the invitation is
    /// still pending. When the answer is `Accept`, the user's character has its
    /// elimination flag cleared in the same transaction.
    ///
    /// # Arguments
    /// - `id` - Invitation ID
    /// - `response` - The user's answer
    ///
    /// # Returns
    /// - `Ok(Some(WildCardInvitation))` - The updated invitation
    /// - `Ok(None)` - No pending invitation with that ID; nothing was written
    /// - `Err(DbErr)` - Database error; nothing was written
    pub async fn respond(
        &self,
        id: i32,
        response: InvitationResponse,
    ) -> Result<Option<WildCardInvitation>, DbErr> {
        let txn = self.db.begin().await?;

        let now = Utc::now();

        let answered = entity::prelude::WildcardInvitation::update_many()
            .col_expr(
                entity::wildcard_invitation::Column::Status,
                Expr::value(response.resulting_status().into_entity()),
            )
            .col_expr(
                entity::wildcard_invitation::Column::RespondedAt,
                Expr::value(now),
            )
            .col_expr(entity::wildcard_invitation::Column::UpdatedAt, Expr::value(now))
            .filter(entity::wildcard_invitation::Column::Id.eq(id))
            .filter(
                entity::wildcard_invitation::Column::Status.eq(InvitationStatusEntity::Pending),
            )
            .exec(&txn)
            .await?;

        if answered.rows_affected == 0 {
            return Ok(None);
        }

        let Some(invitation) = entity::prelude::WildcardInvitation::find_by_id(id)
            .one(&txn)
            .await?
        else {
            return Ok(None);
        };

        if response == InvitationResponse::Accept {
            entity::prelude::Character::update_many()
                .filter(entity::character::Column::UserId.eq(invitation.user_id))
                .col_expr(entity::character::Column::IsEliminated, Expr::value(false))
                .col_expr(entity::character::Column::UpdatedAt, Expr::value(now))
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        Ok(Some(WildCardInvitation::from_entity(invitation)))
    }

    /// Puts an invitation back to pending and clears `responded_at`.
    ///
    /// Returns `Ok(None)` if no invitation has that ID.
    pub async fn resend(&self, id: i32) -> Result<Option<WildCardInvitation>, DbErr> {
        let Some(invitation) = entity::prelude::WildcardInvitation::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::wildcard_invitation::ActiveModel = invitation.into();
        active_model.status = ActiveValue::Set(InvitationStatusEntity::Pending);
        active_model.responded_at = ActiveValue::Set(None);
        active_model.updated_at = ActiveValue::Set(Utc::now());
        let entity = active_model.update(self.db).await?;

        Ok(Some(WildCardInvitation::from_entity(entity)))
    }

    pub async fn count_pending(&self) -> Result<u64, DbErr> {
        entity::prelude::WildcardInvitation::find()
            .filter(
                entity::wildcard_invitation::Column::Status.eq(InvitationStatusEntity::Pending),
            )
            .count(self.db)
            .await
    }
}
