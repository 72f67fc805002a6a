//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user rows. It handles
//! inserts (both admin seeding and registration go through the same statement)
//! and the username lookup that login relies on.

use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::model::user::{CreateUserParam, User};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user row.
    ///
    /// The password hash is stored exactly as provided. A duplicate username
    /// violates the unique constraint and surfaces as `DbErr`; callers that
    /// want to report it (registration) inspect `DbErr::sql_err()`.
    ///
    /// # Arguments
    /// - `param` - Username, email, stored hash, and role for the new account
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with its generated id
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn insert(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(param.role),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by username.
    ///
    /// # Arguments
    /// - `username` - The username to look up
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
}
