use super::*;
use entity::game_match::MatchStatus as MatchStatusEntity;

/// Tests the effects of recording a goal.
///
/// Verifies that the goal row is inserted, the scoring team's score goes up by one,
/// the match clock moves to the goal minute, and the scorer's character goal counter
/// goes up by one.
///
/// Expected: Ok(Some) with every effect applied
#[tokio::test]
async fn applies_all_goal_effects() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, character) = factory::create_user_with_character(db).await?;
    let created = factory::MatchFactory::new(db)
        .status(MatchStatusEntity::Active)
        .build()
        .await?;

    let repo = MatchRepository::new(db);
    let goal = repo
        .record_goal(
            created.id,
            RecordGoalParam {
                user_id: user.id,
                team: Team::Z,
                minute: 34,
            },
        )
        .await?
        .unwrap();

    assert_eq!(goal.match_id, created.id);
    assert_eq!(goal.user_id, user.id);
    assert_eq!(goal.team, Team::Z);
    assert_eq!(goal.minute, 34);

    let game_match = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(game_match.team_v_score, 0);
    assert_eq!(game_match.team_z_score, 1);
    assert_eq!(game_match.current_minute, 34);

    let scorer = CharacterRepository::new(db)
        .find_by_user_id(user.id)
        .await?
        .unwrap();
    assert_eq!(scorer.goals, character.goals + 1);

    Ok(())
}

/// Tests that an earlier goal minute never moves the clock backwards.
///
/// Expected: current minute stays at the latest goal minute
#[tokio::test]
async fn keeps_latest_minute() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let created = factory::MatchFactory::new(db)
        .status(MatchStatusEntity::Active)
        .build()
        .await?;

    let repo = MatchRepository::new(db);
    for minute in [60, 12] {
        repo.record_goal(
            created.id,
            RecordGoalParam {
                user_id: user.id,
                team: Team::V,
                minute,
            },
        )
        .await?;
    }

    let game_match = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(game_match.team_v_score, 2);
    assert_eq!(game_match.current_minute, 60);

    Ok(())
}

/// Tests a goal by a user without a character.
///
/// Expected: Ok(Some), score updated, no character touched
#[tokio::test]
async fn records_goal_for_user_without_character() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let created = factory::MatchFactory::new(db)
        .status(MatchStatusEntity::Active)
        .build()
        .await?;

    let repo = MatchRepository::new(db);
    let goal = repo
        .record_goal(
            created.id,
            RecordGoalParam {
                user_id: user.id,
                team: Team::V,
                minute: 5,
            },
        )
        .await?;

    assert!(goal.is_some());
    assert_eq!(repo.find_by_id(created.id).await?.unwrap().team_v_score, 1);

    Ok(())
}

/// Tests a goal for an unknown scorer.
///
/// Verifies that the failed goal insert rolls back and leaves the score unchanged.
///
/// Expected: Err, score still 0-0
#[tokio::test]
async fn rolls_back_on_failed_insert() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::MatchFactory::new(db)
        .status(MatchStatusEntity::Active)
        .build()
        .await?;

    let repo = MatchRepository::new(db);
    let result = repo
        .record_goal(
            created.id,
            RecordGoalParam {
                user_id: 999,
                team: Team::V,
                minute: 5,
            },
        )
        .await;

    assert!(result.is_err());

    let game_match = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!((game_match.team_v_score, game_match.team_z_score), (0, 0));
    assert!(repo.get_goals(created.id).await?.is_empty());

    Ok(())
}

/// Tests recording a goal in a match that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = MatchRepository::new(db);
    let result = repo
        .record_goal(
            42,
            RecordGoalParam {
                user_id: user.id,
                team: Team::V,
                minute: 5,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests recording a goal in a match that has finished.
///
/// Expected: Ok(None), no goal row, score unchanged
#[tokio::test]
async fn returns_none_for_finished_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, character) = factory::create_user_with_character(db).await?;
    let created = factory::MatchFactory::new(db)
        .status(MatchStatusEntity::Finished)
        .build()
        .await?;

    let repo = MatchRepository::new(db);
    let result = repo
        .record_goal(
            created.id,
            RecordGoalParam {
                user_id: user.id,
                team: Team::V,
                minute: 90,
            },
        )
        .await?;

    assert!(result.is_none());
    assert!(repo.get_goals(created.id).await?.is_empty());

    let game_match = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(game_match.team_v_score, 0);

    let scorer = CharacterRepository::new(db)
        .find_by_user_id(user.id)
        .await?
        .unwrap();
    assert_eq!(scorer.goals, character.goals);

    Ok(())
}
