use sea_orm::{DbErr, EntityTrait, SqlErr};
use test_utils::builder::TestBuilder;

use crate::data::user::UserRepository;
use crate::model::user::CreateUserParam;

mod find_by_username;
mod insert;

fn sample_param(username: &str) -> CreateUserParam {
    CreateUserParam {
        username: username.to_string(),
        email: format!("{}@example.com", username),
        password_hash: "$2b$12$abcdefghijklmnopqrstuv".to_string(),
        role: "user".to_string(),
    }
}
