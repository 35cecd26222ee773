use super::*;

/// Tests splitting characters into eliminated and active lists.
///
/// Verifies that each list only holds matching characters, best ranking first.
///
/// Expected: active list ordered by ranking, eliminated list holds the rest
#[tokio::test]
async fn splits_by_elimination_ordered_by_ranking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let third = factory::create_user(db).await?;

    let low = factory::CharacterFactory::new(db, first.id)
        .ranking(250)
        .build()
        .await?;
    let high = factory::CharacterFactory::new(db, second.id)
        .ranking(1)
        .build()
        .await?;
    let out = factory::CharacterFactory::new(db, third.id)
        .eliminated(true)
        .build()
        .await?;

    let repo = CharacterRepository::new(db);
    let active = repo.get_active().await?;
    let eliminated = repo.get_eliminated().await?;

    assert_eq!(
        active.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![high.id, low.id]
    );
    assert_eq!(
        eliminated.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![out.id]
    );

    Ok(())
}
