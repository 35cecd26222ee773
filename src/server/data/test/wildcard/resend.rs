use super::*;

/// Tests the response time lifecycle across answer and resend.
///
/// Verifies that `responded_at` is unset while pending, set after an answer, and
/// cleared again when the invitation is resent.
///
/// Expected: None, then Some, then None with status back to pending
#[tokio::test]
async fn resend_clears_response() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = WildCardInvitationRepository::new(db);
    let created = repo.create(user.id).await?;
    assert!(created.responded_at.is_none());

    let answered = repo
        .respond(created.id, InvitationResponse::Reject)
        .await?
        .unwrap();
    assert!(answered.responded_at.is_some());

    let resent = repo.resend(created.id).await?.unwrap();
    assert_eq!(resent.status, InvitationStatus::Pending);
    assert!(resent.responded_at.is_none());
    assert_eq!(resent.id, created.id);

    Ok(())
}

/// Tests resending an invitation that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_invitation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WildCardInvitationRepository::new(db);

    assert!(repo.resend(42).await?.is_none());

    Ok(())
}
