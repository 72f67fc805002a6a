//! Full-router tests exercising the HTTP surface end to end.
//!
//! Each test builds the real router on an in-memory SQLite database with a
//! working session layer, then drives it with `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use sea_orm::DatabaseConnection;
use test_utils::builder::TestBuilder;
use tower::ServiceExt;

use crate::router;
use crate::state::AppState;

mod calendar;

/// Builds the application router on a fresh in-memory database.
///
/// Returns the router (with session layer attached) and the database
/// connection for direct row inspection.
async fn test_app() -> (Router, DatabaseConnection) {
    let mut context = TestBuilder::new()
        .with_portal_tables()
        .build()
        .await
        .unwrap();
    let session_layer = context.session_layer().await.unwrap();
    let db = context.db.clone().unwrap();

    let app = router::router()
        .with_state(AppState::new(db.clone()))
        .layer(session_layer);

    (app, db)
}

/// Builds a form-encoded POST request.
fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Builds a plain GET request.
fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Collects a response body into a JSON value.
async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Registers an account through the HTTP surface.
async fn register_user(app: &Router, username: &str, password: &str) {
    let response = app
        .clone()
        .oneshot(form_post(
            "/register",
            &format!(
                "username={}&email={}@example.com&password={}",
                username, username, password
            ),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}
