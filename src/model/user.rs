//! User domain models and parameters.
//!
//! Provides the user domain model plus the parameter and form types used by
//! account creation, registration, and login.

use serde::{Deserialize, Serialize};

use crate::error::validation::ValidationError;

/// A portal account as stored in the database.
///
/// The stored `password_hash` is a bcrypt digest for self-registered accounts;
/// accounts seeded through `/add_user` carry whatever hash the caller supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password_hash,
            role: entity.role,
        }
    }
}

/// Parameters for inserting a user row.
///
/// The hash is stored verbatim; hashing (when it happens at all) is the
/// caller's business. Registration hashes the plaintext first, the admin
/// seeding endpoint passes a precomputed hash through unchanged.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

/// Parameters for self-registration. Carries the plaintext password, which is
/// hashed before it reaches the data layer and never stored.
#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Parameters for a login attempt.
#[derive(Debug, Clone)]
pub struct LoginParam {
    pub username: String,
    pub password: String,
}

/// Form payload for POST /add_user.
#[derive(Debug, Deserialize)]
pub struct AddUserForm {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<String>,
}

impl AddUserForm {
    /// Validates field presence and converts into insert parameters.
    pub fn into_param(self) -> Result<CreateUserParam, ValidationError> {
        Ok(CreateUserParam {
            username: self.username.ok_or(ValidationError::MissingField("username"))?,
            email: self.email.ok_or(ValidationError::MissingField("email"))?,
            password_hash: self
                .password_hash
                .ok_or(ValidationError::MissingField("password_hash"))?,
            role: self.role.ok_or(ValidationError::MissingField("role"))?,
        })
    }
}

/// Form payload for POST /register.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

impl RegisterForm {
    /// Validates field presence and converts into registration parameters.
    /// The role defaults to `"user"` when the form omits it.
    pub fn into_param(self) -> Result<RegisterParam, ValidationError> {
        Ok(RegisterParam {
            username: self.username.ok_or(ValidationError::MissingField("username"))?,
            email: self.email.ok_or(ValidationError::MissingField("email"))?,
            password: self.password.ok_or(ValidationError::MissingField("password"))?,
            role: self.role.unwrap_or_else(|| "user".to_string()),
        })
    }
}

/// Form payload for POST /login.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginForm {
    pub fn into_param(self) -> Result<LoginParam, ValidationError> {
        Ok(LoginParam {
            username: self.username.ok_or(ValidationError::MissingField("username"))?,
            password: self.password.ok_or(ValidationError::MissingField("password"))?,
        })
    }
}

/// Body of a successful login: the persisted role travels back to the client
/// alongside the username.
#[derive(Debug, Serialize)]
pub struct LoginDto {
    pub status: String,
    pub username: String,
    pub role: String,
}

impl LoginDto {
    pub fn new(username: String, role: String) -> Self {
        Self {
            status: "success".to_string(),
            username,
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_role_defaults_to_user() {
        let form = RegisterForm {
            username: Some("anna".to_string()),
            email: Some("anna@example.com".to_string()),
            password: Some("hunter2".to_string()),
            role: None,
        };

        let param = form.into_param().unwrap();
        assert_eq!(param.role, "user");
    }

    #[test]
    fn register_missing_password_is_named() {
        let form = RegisterForm {
            username: Some("anna".to_string()),
            email: Some("anna@example.com".to_string()),
            password: None,
            role: None,
        };

        assert_eq!(
            form.into_param().unwrap_err(),
            ValidationError::MissingField("password")
        );
    }

    #[test]
    fn add_user_requires_explicit_role() {
        let form = AddUserForm {
            username: Some("bea".to_string()),
            email: Some("bea@example.com".to_string()),
            password_hash: Some("$2b$12$abcdefghijklmnopqrstuv".to_string()),
            role: None,
        };

        assert_eq!(
            form.into_param().unwrap_err(),
            ValidationError::MissingField("role")
        );
    }
}
