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
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(integer_uniq(Character::UserId))
                    .col(string(Character::Name))
                    .col(string(Character::Position))
                    .col(integer_null(Character::Age))
                    .col(integer_null(Character::Height))
                    .col(text_null(Character::Bio))
                    .col(string_null(Character::PlayerClass))
                    .col(string_null(Character::Subclass))
                    .col(string_null(Character::Weapon))
                    .col(string_null(Character::Motivation))
                    .col(string_null(Character::Origin))
                    .col(string_null(Character::Avatar))
                    .col(integer(Character::Level).default(1))
                    .col(integer(Character::Experience).default(0))
                    .col(integer(Character::Matches).default(0))
                    .col(integer(Character::Goals).default(0))
                    .col(integer(Character::Ranking).default(299))
                    .col(boolean(Character::IsEliminated).default(false))
                    .col(integer(Character::Speed).default(50))
                    .col(integer(Character::Strength).default(50))
                    .col(integer(Character::Stamina).default(50))
                    .col(integer(Character::Shooting).default(50))
                    .col(integer(Character::Passing).default(50))
                    .col(integer(Character::Dribbling).default(50))
                    .col(
                        timestamp_with_time_zone(Character::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Character::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_character_user_id")
                            .from(Character::Table, Character::UserId)
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
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Character {
    #[sea_orm(iden = "characters")]
    Table,
    Id,
    UserId,
    Name,
    Position,
    Age,
    Height,
    Bio,
    PlayerClass,
    Subclass,
    Weapon,
    Motivation,
    Origin,
    Avatar,
    Level,
    Experience,
    Matches,
    Goals,
    Ranking,
    IsEliminated,
    Speed,
    Strength,
    Stamina,
    Shooting,
    Passing,
    Dribbling,
    CreatedAt,
    UpdatedAt,
}
