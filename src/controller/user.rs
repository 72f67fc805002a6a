use axum::{extract::State, http::StatusCode, response::IntoResponse, Form, Json};

use crate::{
    error::AppError,
    model::{api::StatusDto, user::AddUserForm},
    service::user::UserService,
    state::AppState,
};

/// POST /add_user
/// Seed an account from a precomputed password hash; nothing is hashed here
pub async fn add_user(
    State(state): State<AppState>,
    Form(form): Form<AddUserForm>,
) -> Result<impl IntoResponse, AppError> {
    let param = form.into_param()?;

    let user_service = UserService::new(&state.db);
    user_service.create(param).await?;

    Ok((StatusCode::CREATED, Json(StatusDto::success())))
}
