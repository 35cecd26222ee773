use super::*;

/// Tests creating a character for a user.
///
/// Verifies that progression fields start at their defaults and the provided stats
/// and optional fields are stored as given.
///
/// Expected: Ok with level 1, ranking 299, not eliminated
#[tokio::test]
async fn creates_character_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = CharacterRepository::new(db);
    let character = repo.create(create_param(user.id, "Kaiser")).await?;

    assert_eq!(character.user_id, user.id);
    assert_eq!(character.name, "Kaiser");
    assert_eq!(character.age, Some(17));
    assert_eq!(character.height, None);
    assert_eq!(character.level, 1);
    assert_eq!(character.experience, 0);
    assert_eq!(character.goals, 0);
    assert_eq!(character.ranking, 299);
    assert!(!character.is_eliminated);
    assert_eq!(character.stats.speed, 80);
    assert_eq!(character.stats.dribbling, 50);

    Ok(())
}

/// Tests creating a second character for the same user.
///
/// Verifies that the unique index on `user_id` rejects the insert and the first
/// character is left untouched.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_second_character() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = CharacterRepository::new(db);
    let first = repo.create(create_param(user.id, "Kaiser")).await?;
    let result = repo.create(create_param(user.id, "Ness")).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    let stored = repo.find_by_user_id(user.id).await?.unwrap();
    assert_eq!(stored, first);

    Ok(())
}
