use super::*;

/// Tests creating an invitation.
///
/// Expected: Ok with status pending and no response time
#[tokio::test]
async fn creates_pending_invitation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = WildCardInvitationRepository::new(db);
    let invitation = repo.create(user.id).await?;

    assert_eq!(invitation.user_id, user.id);
    assert_eq!(invitation.status, InvitationStatus::Pending);
    assert!(invitation.responded_at.is_none());

    Ok(())
}

/// Tests creating an invitation for a user that does not exist.
///
/// Expected: Err from the foreign key on `user_id`
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WildCardInvitationRepository::new(db);
    let result = repo.create(999).await;

    assert!(result.is_err());

    Ok(())
}
