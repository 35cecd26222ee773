use super::*;
use crate::server::service::admin::AdminService;

/// Tests the dashboard counters.
///
/// Expected: player counts over characters, goals summed, pending invitations counted
#[tokio::test]
async fn computes_stats() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::create_user(db).await?;
    let eliminated = factory::create_user(db).await?;
    factory::create_user(db).await?;

    factory::CharacterFactory::new(db, active.id)
        .goals(2)
        .build()
        .await?;
    factory::CharacterFactory::new(db, eliminated.id)
        .goals(1)
        .eliminated(true)
        .build()
        .await?;
    factory::create_invitation(db, eliminated.id).await?;

    let stats = AdminService::new(db).get_stats().await?;

    assert_eq!(stats.total_players, 2);
    assert_eq!(stats.active_players, 1);
    assert_eq!(stats.eliminated_players, 1);
    assert_eq!(stats.total_goals, 3);
    assert_eq!(stats.pending_invitations, 1);

    Ok(())
}

/// Tests the counters on an empty database.
///
/// Expected: every counter at zero
#[tokio::test]
async fn computes_empty_stats() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stats = AdminService::new(db).get_stats().await?;

    assert_eq!(stats.total_players, 0);
    assert_eq!(stats.total_goals, 0);
    assert_eq!(stats.pending_invitations, 0);

    Ok(())
}

/// Tests eliminating a character.
///
/// Verifies that the character moves to the eliminated list and that no invitation is
/// sent as a side effect.
///
/// Expected: Ok with the character eliminated, no invitations
#[tokio::test]
async fn eliminates_character_without_inviting() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, character) = factory::create_user_with_character(db).await?;

    let service = AdminService::new(db);
    let eliminated = service.eliminate(user.id).await?;

    assert_eq!(eliminated.id, character.id);
    assert!(eliminated.is_eliminated);

    let listed = service.get_eliminated().await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, character.id);

    assert_eq!(service.get_stats().await?.pending_invitations, 0);

    Ok(())
}

/// Tests eliminating a user who has no character.
///
/// Expected: Err(AppError::NotFound) and no invitation created
#[tokio::test]
async fn eliminate_fails_without_character() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = AdminService::new(db);
    let result = service.eliminate(user.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(service.get_stats().await?.pending_invitations, 0);

    Ok(())
}

/// Tests listing users for the dashboard.
///
/// Expected: every user, with characters nested where they exist
#[tokio::test]
async fn lists_users_with_characters() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _) = factory::create_user_with_character(db).await?;
    let newcomer = factory::create_user(db).await?;

    let users = AdminService::new(db).get_users().await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].user.id, owner.id);
    assert!(users[0].character.is_some());
    assert_eq!(users[1].user.id, newcomer.id);
    assert!(users[1].character.is_none());

    Ok(())
}
