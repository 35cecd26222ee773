pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_character_table;
mod m20260301_000003_create_wildcard_invitation_table;
mod m20260302_000004_create_match_table;
mod m20260302_000005_create_goal_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_character_table::Migration),
            Box::new(m20260301_000003_create_wildcard_invitation_table::Migration),
            Box::new(m20260302_000004_create_match_table::Migration),
            Box::new(m20260302_000005_create_goal_table::Migration),
        ]
    }
}
