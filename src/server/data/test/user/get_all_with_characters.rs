use super::*;

/// Tests listing users with their characters.
///
/// Verifies that users with and without characters are both returned, ordered by ID.
///
/// Expected: Ok with both users, only the first carrying a character
#[tokio::test]
async fn lists_users_with_optional_characters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (with_character, character) = factory::create_user_with_character(db).await?;
    let without_character = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let users = repo.get_all_with_characters().await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].user.id, with_character.id);
    assert_eq!(
        users[0].character.as_ref().map(|c| c.id),
        Some(character.id)
    );
    assert_eq!(users[1].user.id, without_character.id);
    assert!(users[1].character.is_none());

    Ok(())
}

/// Tests listing with no users.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list_without_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let users = repo.get_all_with_characters().await?;

    assert!(users.is_empty());

    Ok(())
}
