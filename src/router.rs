use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    controller::{auth, calendar, event, image, user},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/add_user", post(user::add_user))
        .route("/add_calendar_entry", post(calendar::add_calendar_entry))
        .route("/add_image", post(image::add_image))
        .route("/add_event", post(event::add_event))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/calendar_entries", get(calendar::get_calendar_entries))
        .route("/events", get(event::get_events))
        .route("/images", get(image::get_images))
}

async fn index() -> &'static str {
    "REST API läuft!"
}
