use super::*;

/// Tests accepting an invitation.
///
/// Verifies that the invitation becomes accepted with a response time and the user's
/// character is no longer eliminated.
///
/// Expected: Ok(Some) with status accepted, character reinstated
#[tokio::test]
async fn accept_reinstates_character() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::CharacterFactory::new(db, user.id)
        .eliminated(true)
        .build()
        .await?;
    let invitation = factory::create_invitation(db, user.id).await?;

    let repo = WildCardInvitationRepository::new(db);
    let answered = repo
        .respond(invitation.id, InvitationResponse::Accept)
        .await?
        .unwrap();

    assert_eq!(answered.status, InvitationStatus::Accepted);
    assert!(answered.responded_at.is_some());

    let character = CharacterRepository::new(db)
        .find_by_user_id(user.id)
        .await?
        .unwrap();
    assert!(!character.is_eliminated);

    Ok(())
}

/// Tests rejecting an invitation.
///
/// Expected: Ok(Some) with status rejected, character stays eliminated
#[tokio::test]
async fn reject_keeps_character_eliminated() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::CharacterFactory::new(db, user.id)
        .eliminated(true)
        .build()
        .await?;
    let invitation = factory::create_invitation(db, user.id).await?;

    let repo = WildCardInvitationRepository::new(db);
    let answered = repo
        .respond(invitation.id, InvitationResponse::Reject)
        .await?
        .unwrap();

    assert_eq!(answered.status, InvitationStatus::Rejected);
    assert!(answered.responded_at.is_some());

    let character = CharacterRepository::new(db)
        .find_by_user_id(user.id)
        .await?
        .unwrap();
    assert!(character.is_eliminated);

    Ok(())
}

/// Tests answering an invitation that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_invitation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WildCardInvitationRepository::new(db);
    let result = repo.respond(42, InvitationResponse::Accept).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests answering an invitation that was already answered.
///
/// Expected: Ok(None), the first answer kept
#[tokio::test]
async fn skips_answered_invitation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::CharacterFactory::new(db, user.id)
        .eliminated(true)
        .build()
        .await?;
    let invitation = factory::create_invitation(db, user.id).await?;

    let repo = WildCardInvitationRepository::new(db);
    repo.respond(invitation.id, InvitationResponse::Reject)
        .await?
        .unwrap();

    let result = repo
        .respond(invitation.id, InvitationResponse::Accept)
        .await?;

    assert!(result.is_none());

    let latest = repo.find_latest_by_user(user.id).await?.unwrap();
    assert_eq!(latest.status, InvitationStatus::Rejected);

    let character = CharacterRepository::new(db)
        .find_by_user_id(user.id)
        .await?
        .unwrap();
    assert!(character.is_eliminated);

    Ok(())
}
