use super::*;

/// Tests loading a user who owns a character.
///
/// Expected: Ok(Some) with the character attached
#[tokio::test]
async fn returns_user_with_character() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, character) = factory::create_user_with_character(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_id_with_character(user.id).await?.unwrap();

    assert_eq!(result.user.id, user.id);
    assert_eq!(result.character.map(|c| c.id), Some(character.id));

    Ok(())
}

/// Tests loading a user without a character.
///
/// Expected: Ok(Some) with `character` set to None
#[tokio::test]
async fn returns_user_without_character() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_id_with_character(user.id).await?.unwrap();

    assert_eq!(result.user.id, user.id);
    assert!(result.character.is_none());

    Ok(())
}

/// Tests loading an unknown user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.find_by_id_with_character(42).await?;

    assert!(result.is_none());

    Ok(())
}
