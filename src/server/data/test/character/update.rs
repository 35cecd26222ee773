use super::*;

/// Tests a partial update.
///
/// Verifies that only the provided fields change.
///
/// Expected: Ok(Some) with the new name and speed, everything else unchanged
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = CharacterRepository::new(db);
    let created = repo.create(create_param(user.id, "Kaiser")).await?;

    let updated = repo
        .update(
            user.id,
            UpdateCharacterParam {
                name: Some("Michael Kaiser".to_string()),
                speed: Some(95),
                bio: Some(Some("Emperor".to_string())),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Michael Kaiser");
    assert_eq!(updated.stats.speed, 95);
    assert_eq!(updated.bio.as_deref(), Some("Emperor"));
    assert_eq!(updated.position, created.position);
    assert_eq!(updated.stats.strength, created.stats.strength);
    assert_eq!(updated.ranking, created.ranking);
    assert!(updated.updated_at >= created.updated_at);

    Ok(())
}

/// Tests clearing optional fields.
///
/// Expected: `Some(None)` clears the stored value, `None` leaves it alone
#[tokio::test]
async fn clears_fields_set_to_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = CharacterRepository::new(db);
    repo.create(create_param(user.id, "Kaiser")).await?;
    repo.update(
        user.id,
        UpdateCharacterParam {
            weapon: Some(Some("Kaiser Impact".to_string())),
            ..Default::default()
        },
    )
    .await?;

    let updated = repo
        .update(
            user.id,
            UpdateCharacterParam {
                weapon: Some(None),
                age: Some(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.weapon, None);
    assert_eq!(updated.age, None);
    assert_eq!(updated.name, "Kaiser");

    Ok(())
}

/// Tests updating when the user has no character.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_character() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = CharacterRepository::new(db);
    let result = repo
        .update(
            user.id,
            UpdateCharacterParam {
                name: Some("Nobody".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
