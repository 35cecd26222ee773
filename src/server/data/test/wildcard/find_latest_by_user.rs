use super::*;

/// Tests that the newest invitation of the user is returned.
///
/// Expected: Ok(Some) with the last created invitation for that user only
#[tokio::test]
async fn returns_newest_invitation_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    factory::WildCardInvitationFactory::new(db, user.id)
        .status(entity::wildcard_invitation::InvitationStatus::Rejected)
        .build()
        .await?;
    let newest = factory::create_invitation(db, user.id).await?;
    factory::create_invitation(db, other.id).await?;

    let repo = WildCardInvitationRepository::new(db);
    let found = repo.find_latest_by_user(user.id).await?.unwrap();

    assert_eq!(found.id, newest.id);

    Ok(())
}

/// Tests a user who was never invited.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_invitation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = WildCardInvitationRepository::new(db);

    assert!(repo.find_latest_by_user(user.id).await?.is_none());

    Ok(())
}
