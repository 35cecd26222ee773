use super::*;
use entity::game_match::MatchStatus as MatchStatusEntity;

/// Tests listing the goals of a match.
///
/// Expected: goals of that match only, ordered by minute
#[tokio::test]
async fn lists_goals_by_minute() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = factory::MatchFactory::new(db)
        .status(MatchStatusEntity::Active)
        .build()
        .await?;
    let second = factory::MatchFactory::new(db)
        .status(MatchStatusEntity::Active)
        .build()
        .await?;

    let repo = MatchRepository::new(db);
    for (match_id, minute) in [(first.id, 70), (first.id, 15), (second.id, 30)] {
        repo.record_goal(
            match_id,
            RecordGoalParam {
                user_id: user.id,
                team: Team::V,
                minute,
            },
        )
        .await?;
    }

    let goals = repo.get_goals(first.id).await?;

    assert_eq!(
        goals.iter().map(|g| g.minute).collect::<Vec<_>>(),
        vec![15, 70]
    );

    Ok(())
}
