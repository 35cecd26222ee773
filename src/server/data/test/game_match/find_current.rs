use super::*;
use entity::game_match::MatchStatus as MatchStatusEntity;

/// Tests that the latest unfinished match is current.
///
/// Expected: Ok(Some) with the newest non-finished match
#[tokio::test]
async fn returns_latest_unfinished_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::MatchFactory::new(db)
        .status(MatchStatusEntity::Active)
        .build()
        .await?;
    let latest = factory::create_match(db).await?;
    factory::MatchFactory::new(db)
        .status(MatchStatusEntity::Finished)
        .build()
        .await?;

    let repo = MatchRepository::new(db);
    let current = repo.find_current().await?.unwrap();

    assert_eq!(current.id, latest.id);

    Ok(())
}

/// Tests with only finished matches.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_all_finished() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::MatchFactory::new(db)
        .status(MatchStatusEntity::Finished)
        .build()
        .await?;

    let repo = MatchRepository::new(db);

    assert!(repo.find_current().await?.is_none());

    Ok(())
}
