//! User service for the admin seeding endpoint.

use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, User},
};

/// Service backing POST /add_user.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user from a precomputed password hash.
    ///
    /// No hashing happens here: the caller supplies the stored hash directly,
    /// and it goes into the row verbatim. Constraint violations are not
    /// translated for this endpoint; they surface as database errors.
    ///
    /// # Arguments
    /// - `param` - Username, email, precomputed hash, and role
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::DbErr)` - Database failure, including duplicates
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);
        let user = repo.insert(param).await?;
        Ok(user)
    }
}
