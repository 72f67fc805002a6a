//! Authentication service: registration and login.
//!
//! Registration hashes the plaintext password with bcrypt before it reaches
//! the data layer; the plaintext is never stored. Login verifies the candidate
//! password against the stored digest and hands the authenticated user back to
//! the controller, which owns the session write.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, LoginParam, RegisterParam, User},
};

/// Service providing registration and login logic.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// Hashes the plaintext password and inserts the user row. A duplicate
    /// username trips the unique constraint and is reported as a 400 with the
    /// driver's constraint-violation text; nothing is committed in that case.
    ///
    /// # Arguments
    /// - `param` - Username, email, plaintext password, and role
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::BadRequest)` - Unique constraint violation (username taken)
    /// - `Err(AppError)` - Hashing or database failure
    pub async fn register(&self, param: RegisterParam) -> Result<User, AppError> {
        let password_hash = hash_password(param.password).await?;

        let repo = UserRepository::new(self.db);
        let user = repo
            .insert(CreateUserParam {
                username: param.username,
                email: param.email,
                password_hash,
                role: param.role,
            })
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(message)) => AppError::BadRequest(message),
                _ => AppError::from(err),
            })?;

        Ok(user)
    }

    /// Verifies a login attempt.
    ///
    /// Looks the user up by username and checks the candidate password against
    /// the stored bcrypt digest. Unknown usernames and wrong passwords produce
    /// the same error so the response never reveals which field was wrong.
    ///
    /// # Arguments
    /// - `param` - Username and candidate password
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials matched; the user's stored role rides along
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown username or wrong password
    /// - `Err(AppError)` - Database failure
    pub async fn login(&self, param: LoginParam) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_username(&param.username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(param.password, user.password_hash.clone()).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}

/// Hashes a plaintext password with bcrypt on a blocking thread.
///
/// bcrypt work is CPU-bound; running it on the async executor would stall
/// other requests for the duration of a hash.
async fn hash_password(password: String) -> Result<String, AppError> {
    let hash =
        tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST)).await??;

    Ok(hash)
}

/// Verifies a plaintext password against a stored digest on a blocking thread.
///
/// A digest bcrypt cannot parse (accounts seeded through /add_user carry
/// arbitrary strings) counts as a mismatch rather than a server fault.
async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await?;

    Ok(matches.unwrap_or(false))
}
