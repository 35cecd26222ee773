//! Shared helpers for the factory modules.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{character::CharacterFactory, user::UserFactory};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Returns a process-wide unique value for building usernames and names.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a default character owned by it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, character))` - Both created rows
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user_with_character(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::character::Model), DbErr> {
    let user = UserFactory::new(db).build().await?;
    let character = CharacterFactory::new(db, user.id).build().await?;

    Ok((user, character))
}
