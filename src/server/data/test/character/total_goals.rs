use super::*;

/// Tests summing goal counters across characters.
///
/// Expected: Ok with the sum
#[tokio::test]
async fn sums_goals_of_all_characters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    factory::CharacterFactory::new(db, first.id)
        .goals(3)
        .build()
        .await?;
    factory::CharacterFactory::new(db, second.id)
        .goals(4)
        .eliminated(true)
        .build()
        .await?;

    let repo = CharacterRepository::new(db);

    assert_eq!(repo.total_goals().await?, 7);

    Ok(())
}

/// Tests summing goals with no characters.
///
/// Expected: Ok(0) instead of a NULL sum
#[tokio::test]
async fn returns_zero_without_characters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);

    assert_eq!(repo.total_goals().await?, 0);

    Ok(())
}
