use super::*;

/// Tests eliminating and reinstating a character.
///
/// Expected: the flag follows each call
#[tokio::test]
async fn toggles_elimination_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _) = factory::create_user_with_character(db).await?;

    let repo = CharacterRepository::new(db);

    let eliminated = repo.set_eliminated(user.id, true).await?.unwrap();
    assert!(eliminated.is_eliminated);

    let reinstated = repo.set_eliminated(user.id, false).await?.unwrap();
    assert!(!reinstated.is_eliminated);

    Ok(())
}

/// Tests eliminating a user without a character.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_character() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = CharacterRepository::new(db);
    let result = repo.set_eliminated(user.id, true).await?;

    assert!(result.is_none());

    Ok(())
}
