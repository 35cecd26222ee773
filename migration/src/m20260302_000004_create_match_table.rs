use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameMatch::Table)
                    .if_not_exists()
                    .col(pk_auto(GameMatch::Id))
                    .col(string(GameMatch::TeamVName))
                    .col(string(GameMatch::TeamZName))
                    .col(integer(GameMatch::TeamVScore).default(0))
                    .col(integer(GameMatch::TeamZScore).default(0))
                    .col(string(GameMatch::Status).default("preparing"))
                    .col(timestamp_with_time_zone_null(GameMatch::StartedAt))
                    .col(timestamp_with_time_zone_null(GameMatch::EndedAt))
                    .col(integer(GameMatch::CurrentMinute).default(0))
                    .col(
                        timestamp_with_time_zone(GameMatch::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameMatch::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameMatch {
    #[sea_orm(iden = "matches")]
    Table,
    Id,
    TeamVName,
    TeamZName,
    TeamVScore,
    TeamZScore,
    Status,
    StartedAt,
    EndedAt,
    CurrentMinute,
    CreatedAt,
}
