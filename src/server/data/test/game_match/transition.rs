use super::*;

/// Tests moving a match through its lifecycle.
///
/// Verifies that activation stamps `started_at` and finishing stamps `ended_at`.
///
/// Expected: both timestamps set after finishing
#[tokio::test]
async fn stamps_start_and_end_times() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_match(db).await?;

    let repo = MatchRepository::new(db);

    let active = repo
        .transition(created.id, MatchStatus::Preparing, MatchStatus::Active)
        .await?
        .unwrap();
    assert_eq!(active.status, MatchStatus::Active);
    assert!(active.started_at.is_some());
    assert!(active.ended_at.is_none());

    let finished = repo
        .transition(created.id, MatchStatus::Active, MatchStatus::Finished)
        .await?
        .unwrap();
    assert_eq!(finished.status, MatchStatus::Finished);
    assert_eq!(finished.started_at, active.started_at);
    assert!(finished.ended_at.is_some());

    Ok(())
}

/// Tests a transition from a status the match is no longer in.
///
/// Expected: Ok(None) and the match left as it was
#[tokio::test]
async fn skips_match_in_other_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_match(db).await?;

    let repo = MatchRepository::new(db);
    let result = repo
        .transition(created.id, MatchStatus::Active, MatchStatus::Finished)
        .await?;

    assert!(result.is_none());

    let unchanged = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(unchanged.status, MatchStatus::Preparing);
    assert!(unchanged.ended_at.is_none());

    Ok(())
}

/// Tests two concurrent starts of the same match.
///
/// Expected: exactly one transition applies
#[tokio::test]
async fn applies_concurrent_start_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_match(db).await?;

    let repo = MatchRepository::new(db);
    let (first, second) = tokio::join!(
        repo.transition(created.id, MatchStatus::Preparing, MatchStatus::Active),
        repo.transition(created.id, MatchStatus::Preparing, MatchStatus::Active),
    );

    assert_eq!(usize::from(first?.is_some()) + usize::from(second?.is_some()), 1);

    Ok(())
}

/// Tests changing the status of a match that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MatchRepository::new(db);

    assert!(repo
        .transition(42, MatchStatus::Preparing, MatchStatus::Active)
        .await?
        .is_none());

    Ok(())
}
