use super::*;

/// Tests creating a user.
///
/// Verifies that the repository inserts the user with the given username, hash,
/// and admin flag, and that both timestamps are set.
///
/// Expected: Ok with the created user
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(create_param("isagi")).await?;

    assert_eq!(user.username, "isagi");
    assert_eq!(user.password_hash, "hash");
    assert!(!user.admin);
    assert_eq!(user.created_at, user.updated_at);

    Ok(())
}

/// Tests creating a user with a taken username.
///
/// Verifies that the unique index on username rejects the second insert and that
/// the error is reported as a unique constraint violation.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_param("isagi")).await?;
    let result = repo.create(create_param("isagi")).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
