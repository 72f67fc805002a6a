use axum::{extract::State, http::StatusCode, response::IntoResponse, Form, Json};

use crate::{
    error::AppError,
    model::{api::StatusDto, calendar::AddCalendarEntryForm},
    service::calendar::CalendarService,
    state::AppState,
};

/// POST /add_calendar_entry
/// Create a calendar entry; is_all_day is true only for the checkbox value "on"
pub async fn add_calendar_entry(
    State(state): State<AppState>,
    Form(form): Form<AddCalendarEntryForm>,
) -> Result<impl IntoResponse, AppError> {
    let param = form.into_param()?;

    let calendar_service = CalendarService::new(&state.db);
    calendar_service.create(param).await?;

    Ok((StatusCode::CREATED, Json(StatusDto::success())))
}

/// GET /calendar_entries
/// List all calendar entries ordered by start time ascending
pub async fn get_calendar_entries(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let calendar_service = CalendarService::new(&state.db);
    let entries = calendar_service.list().await?;

    let dtos: Vec<_> = entries.into_iter().map(|entry| entry.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
