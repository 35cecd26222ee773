use super::*;

/// Tests counting all and active characters.
///
/// Expected: total counts everyone, active excludes eliminated characters
#[tokio::test]
async fn counts_total_and_active() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    factory::create_character(db, first.id).await?;
    factory::CharacterFactory::new(db, second.id)
        .eliminated(true)
        .build()
        .await?;

    let repo = CharacterRepository::new(db);

    assert_eq!(repo.count().await?, 2);
    assert_eq!(repo.count_active().await?, 1);

    Ok(())
}
