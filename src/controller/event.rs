use axum::{extract::State, http::StatusCode, response::IntoResponse, Form, Json};

use crate::{
    error::AppError,
    model::{api::StatusDto, event::AddEventForm},
    service::event::EventService,
    state::AppState,
};

/// POST /add_event
/// Create an event attached to a calendar entry; tags arrive as a comma list
pub async fn add_event(
    State(state): State<AppState>,
    Form(form): Form<AddEventForm>,
) -> Result<impl IntoResponse, AppError> {
    let param = form.into_param()?;

    let event_service = EventService::new(&state.db);
    event_service.create(param).await?;

    Ok((StatusCode::CREATED, Json(StatusDto::success())))
}

/// GET /events
/// List all events
pub async fn get_events(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let event_service = EventService::new(&state.db);
    let events = event_service.list().await?;

    let dtos: Vec<_> = events.into_iter().map(|event| event.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
