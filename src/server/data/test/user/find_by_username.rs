use super::*;

/// Tests finding a user by exact username.
///
/// Expected: Ok(Some) for the stored name, Ok(None) for an unknown one
#[tokio::test]
async fn finds_user_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("bachira")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_username("bachira").await?;
    let missing = repo.find_by_username("nagi").await?;

    assert_eq!(found.map(|u| u.id), Some(created.id));
    assert!(missing.is_none());

    Ok(())
}
