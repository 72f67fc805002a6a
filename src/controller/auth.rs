use axum::{extract::State, http::StatusCode, response::IntoResponse, Form, Json};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::session::AuthSession,
    model::{
        api::StatusDto,
        user::{LoginDto, LoginForm, RegisterForm},
    },
    service::auth::AuthService,
    state::AppState,
};

/// POST /register
/// Create an account from a plaintext password; the role defaults to "user"
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<impl IntoResponse, AppError> {
    let param = form.into_param()?;

    let auth_service = AuthService::new(&state.db);
    let user = auth_service.register(param).await?;

    tracing::info!(username = %user.username, "registered new account");

    Ok((StatusCode::CREATED, Json(StatusDto::success())))
}

/// POST /login
/// Verify credentials and store {user_id, username, role} in the session
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse, AppError> {
    let param = form.into_param()?;

    let auth_service = AuthService::new(&state.db);
    let user = auth_service.login(param).await?;

    AuthSession::new(&session).set_identity(&user).await?;

    Ok((StatusCode::OK, Json(LoginDto::new(user.username, user.role))))
}

/// POST /logout
/// Clear the session unconditionally
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    let auth_session = AuthSession::new(&session);

    if let Some(identity) = auth_session.identity().await? {
        tracing::debug!(
            user_id = identity.user_id,
            username = %identity.username,
            role = %identity.role,
            "clearing session on logout"
        );
    }
    auth_session.clear().await;

    Ok((StatusCode::OK, Json(StatusDto::success())))
}
