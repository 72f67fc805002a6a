use axum::{extract::State, http::StatusCode, response::IntoResponse, Form, Json};

use crate::{
    error::AppError,
    model::{api::StatusDto, image::AddImageForm},
    service::image::ImageService,
    state::AppState,
};

/// POST /add_image
/// Record an image reference; the path is stored as an opaque string
pub async fn add_image(
    State(state): State<AppState>,
    Form(form): Form<AddImageForm>,
) -> Result<impl IntoResponse, AppError> {
    let param = form.into_param()?;

    let image_service = ImageService::new(&state.db);
    image_service.create(param).await?;

    Ok((StatusCode::CREATED, Json(StatusDto::success())))
}

/// GET /images
/// List all image records
pub async fn get_images(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let image_service = ImageService::new(&state.db);
    let images = image_service.list().await?;

    let dtos: Vec<_> = images.into_iter().map(|image| image.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
