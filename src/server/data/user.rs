//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation, lookups by id and username, the joined user + character
//! reads used by the auth and admin endpoints, and admin status management.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParam, User, UserWithCharacter};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, and updating user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `param` - Username, already hashed password, and admin flag
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on `username`
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            password: ActiveValue::Set(param.password_hash),
            admin: ActiveValue::Set(param.admin),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by exact username.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that username
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user together with their character in one joined query.
    ///
    /// # Returns
    /// - `Ok(Some(UserWithCharacter))` - User found; `character` is `None` if they have none
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id_with_character(
        &self,
        user_id: i32,
    ) -> Result<Option<UserWithCharacter>, DbErr> {
        let row = entity::prelude::User::find_by_id(user_id)
            .find_also_related(entity::prelude::Character)
            .one(self.db)
            .await?;

        Ok(row.map(UserWithCharacter::from_entity))
    }

    /// Gets every user joined with their character, ordered by user ID.
    ///
    /// Uses a single left join instead of one character query per user.
    ///
    /// # Returns
    /// - `Ok(Vec<UserWithCharacter>)` - All users (empty if there are none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_with_characters(&self) -> Result<Vec<UserWithCharacter>, DbErr> {
        let rows = entity::prelude::User::find()
            .find_also_related(entity::prelude::Character)
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(UserWithCharacter::from_entity).collect())
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used at startup to decide whether the configured admin account must be bootstrapped.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin user exists
    /// - `Ok(false)` - No admin users exist
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Admin.eq(true))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Sets admin status for a user.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user
    /// - `is_admin` - Whether the user should have admin privileges
    ///
    /// # Returns
    /// - `Ok(())` - Admin status updated successfully (or no matching user found)
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn set_admin(&self, user_id: i32, is_admin: bool) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::Admin,
                sea_orm::sea_query::Expr::value(is_admin),
            )
            .col_expr(
                entity::user::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
