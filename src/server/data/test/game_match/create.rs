use super::*;

/// Tests creating a match.
///
/// Expected: Ok with status preparing, 0-0, no start or end time
#[tokio::test]
async fn creates_preparing_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MatchRepository::new(db);
    let game_match = repo
        .create(CreateMatchParam {
            team_v_name: "Blue Lock".to_string(),
            team_z_name: "U-20".to_string(),
        })
        .await?;

    assert_eq!(game_match.team_v_name, "Blue Lock");
    assert_eq!(game_match.team_z_name, "U-20");
    assert_eq!(game_match.status, MatchStatus::Preparing);
    assert_eq!((game_match.team_v_score, game_match.team_z_score), (0, 0));
    assert_eq!(game_match.current_minute, 0);
    assert!(game_match.started_at.is_none());
    assert!(game_match.ended_at.is_none());

    Ok(())
}
