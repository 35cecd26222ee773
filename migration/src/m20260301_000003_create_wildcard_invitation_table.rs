use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WildcardInvitation::Table)
                    .if_not_exists()
                    .col(pk_auto(WildcardInvitation::Id))
                    .col(integer(WildcardInvitation::UserId))
                    .col(string(WildcardInvitation::Status).default("pending"))
                    .col(timestamp_with_time_zone_null(
                        WildcardInvitation::RespondedAt,
                    ))
                    .col(
                        timestamp_with_time_zone(WildcardInvitation::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(WildcardInvitation::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wildcard_invitation_user_id")
                            .from(WildcardInvitation::Table, WildcardInvitation::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_wildcard_invitation_user_id")
                    .table(WildcardInvitation::Table)
                    .col(WildcardInvitation::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WildcardInvitation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WildcardInvitation {
    #[sea_orm(iden = "wildcard_invitations")]
    Table,
    Id,
    UserId,
    Status,
    RespondedAt,
    CreatedAt,
    UpdatedAt,
}
