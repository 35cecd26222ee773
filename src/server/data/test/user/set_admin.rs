use super::*;

/// Tests granting and then revoking admin status.
///
/// Expected: the stored flag follows each call
#[tokio::test]
async fn grants_and_revokes_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    repo.set_admin(user.id, true).await?;
    assert!(repo.find_by_id(user.id).await?.unwrap().admin);

    repo.set_admin(user.id, false).await?;
    assert!(!repo.find_by_id(user.id).await?.unwrap().admin);

    Ok(())
}

/// Tests setting admin status for a user that does not exist.
///
/// Expected: Ok, the update matches no rows
#[tokio::test]
async fn succeeds_for_nonexistent_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.set_admin(999, true).await;

    assert!(result.is_ok());

    Ok(())
}
