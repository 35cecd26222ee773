//! Authentication service for username/password accounts.
//!
//! This module provides the `AuthService` for registering users, verifying logins, and
//! resolving the session user with their character. Passwords are hashed with argon2
//! through `PasswordService`; session issuance itself stays in the controller layer
//! where the `Session` is available.

pub mod password;

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, CredentialsParam, User, UserWithCharacter},
    service::auth::password::PasswordService,
};

/// Service providing registration, login, and session user resolution.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new non-admin user.
    ///
    /// Rejects taken usernames up front, then hashes the password and inserts the user.
    /// A concurrent registration of the same name loses on the unique index and gets the
    /// same error.
    ///
    /// # Arguments
    /// - `param` - Username and plain password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::AuthErr(AuthError::UsernameTaken))` - Username already exists
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, param: CredentialsParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_username(&param.username).await?.is_some() {
            return Err(AuthError::UsernameTaken(param.username).into());
        }

        let password_hash = PasswordService::hash_password(&param.password)?;

        let result = user_repo
            .create(CreateUserParam {
                username: param.username.clone(),
                password_hash,
                admin: false,
            })
            .await;

        match result {
            Ok(user) => Ok(user),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(AuthError::UsernameTaken(param.username).into())
                }
                _ => Err(err.into()),
            },
        }
    }

    /// Verifies a username and password.
    ///
    /// Unknown usernames and wrong passwords fail with the same error, and both run one
    /// argon2 verification so timing does not reveal which.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AppError::AuthErr(AuthError::InvalidCredentials))` - Unknown user or wrong password
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn login(&self, param: CredentialsParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_username(&param.username).await? else {
            PasswordService::verify_dummy(&param.password);
            return Err(AuthError::InvalidCredentials.into());
        };

        if !PasswordService::verify_password(&param.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Resolves the session user together with their character.
    ///
    /// # Returns
    /// - `Ok(UserWithCharacter)` - The user and their character, if any
    /// - `Err(AppError::AuthErr(AuthError::UserNotInDatabase))` - The session names a deleted user
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn current_user(&self, user_id: i32) -> Result<UserWithCharacter, AppError> {
        let user_repo = UserRepository::new(self.db);

        user_repo
            .find_by_id_with_character(user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotInDatabase(user_id).into())
    }

    /// Makes sure an admin account exists.
    ///
    /// Does nothing if any admin already exists. Otherwise promotes the user with the
    /// given username, or creates them with the given password when absent.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The account that was promoted or created
    /// - `Ok(None)` - An admin already existed
    /// - `Err(AppError)` - Database or hashing error
    pub async fn ensure_admin(&self, param: CredentialsParam) -> Result<Option<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.admin_exists().await? {
            return Ok(None);
        }

        if let Some(user) = user_repo.find_by_username(&param.username).await? {
            user_repo.set_admin(user.id, true).await?;
            return Ok(user_repo.find_by_id(user.id).await?);
        }

        let password_hash = PasswordService::hash_password(&param.password)?;
        let user = user_repo
            .create(CreateUserParam {
                username: param.username,
                password_hash,
                admin: true,
            })
            .await?;

        Ok(Some(user))
    }
}
