use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User, m20260302_000004_create_match_table::GameMatch,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Goal::Table)
                    .if_not_exists()
                    .col(pk_auto(Goal::Id))
                    .col(integer(Goal::MatchId))
                    .col(integer(Goal::UserId))
                    .col(string(Goal::Team))
                    .col(integer(Goal::Minute))
                    .col(timestamp_with_time_zone(Goal::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_goal_match_id")
                            .from(Goal::Table, Goal::MatchId)
                            .to(GameMatch::Table, GameMatch::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_goal_user_id")
                            .from(Goal::Table, Goal::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Goal::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Goal {
    #[sea_orm(iden = "goals")]
    Table,
    Id,
    MatchId,
    UserId,
    Team,
    Minute,
    CreatedAt,
}
