use super::*;

/// Tests counting pending invitations.
///
/// Expected: Ok with only pending invitations counted
#[tokio::test]
async fn counts_only_pending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    factory::create_invitation(db, first.id).await?;
    factory::WildCardInvitationFactory::new(db, second.id)
        .status(entity::wildcard_invitation::InvitationStatus::Accepted)
        .build()
        .await?;

    let repo = WildCardInvitationRepository::new(db);

    assert_eq!(repo.count_pending().await?, 1);
    assert_eq!(repo.get_all().await?.len(), 2);

    Ok(())
}
