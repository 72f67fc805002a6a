use super::*;

use sea_orm::EntityTrait;
use test_utils::factory::calendar_entry::CalendarEntryFactory;

async fn only_entry(db: &DatabaseConnection) -> entity::calendar_entry::Model {
    let rows = entity::prelude::CalendarEntry::find().all(db).await.unwrap();
    assert_eq!(rows.len(), 1);
    rows.into_iter().next().unwrap()
}

/// A full form creates an entry with every field persisted.
#[tokio::test]
async fn add_calendar_entry_persists_all_fields() {
    let (app, db) = test_app().await;

    let response = app
        .oneshot(form_post(
            "/add_calendar_entry",
            "title=Stadtfest&description=Innenstadt&location=Marktplatz\
             &start_time=2025-06-01T10:00&end_time=2025-06-01T18:00&is_all_day=on",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["status"], "success");

    let entry = only_entry(&db).await;
    assert_eq!(entry.title, "Stadtfest");
    assert_eq!(entry.description.as_deref(), Some("Innenstadt"));
    assert_eq!(entry.location.as_deref(), Some("Marktplatz"));
    assert_eq!(entry.start_time.to_string(), "2025-06-01 10:00:00");
    assert_eq!(
        entry.end_time.map(|end_time| end_time.to_string()),
        Some("2025-06-01 18:00:00".to_string())
    );
    assert!(entry.is_all_day);
}

/// An absent is_all_day checkbox stores false.
#[tokio::test]
async fn add_calendar_entry_without_is_all_day_stores_false() {
    let (app, db) = test_app().await;

    let response = app
        .oneshot(form_post(
            "/add_calendar_entry",
            "title=Sperrung&start_time=2025-06-02T06:00",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let entry = only_entry(&db).await;
    assert!(!entry.is_all_day);
    assert_eq!(entry.description, None);
    assert_eq!(entry.end_time, None);
}

/// Any checkbox value other than "on" stores false as well.
#[tokio::test]
async fn add_calendar_entry_with_other_checkbox_value_stores_false() {
    let (app, db) = test_app().await;

    let response = app
        .oneshot(form_post(
            "/add_calendar_entry",
            "title=Sperrung&start_time=2025-06-02T06:00&is_all_day=true",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(!only_entry(&db).await.is_all_day);
}

/// A missing title fails validation before any row is written.
#[tokio::test]
async fn add_calendar_entry_missing_title_returns_400() {
    let (app, db) = test_app().await;

    let response = app
        .oneshot(form_post("/add_calendar_entry", "start_time=2025-06-02T06:00"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "missing required field 'title'");

    let rows = entity::prelude::CalendarEntry::find().all(&db).await.unwrap();
    assert!(rows.is_empty());
}

/// The list endpoint returns entries ordered by start time ascending.
#[tokio::test]
async fn get_calendar_entries_is_ordered_by_start_time() {
    let (app, db) = test_app().await;

    let base = chrono::NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let late = CalendarEntryFactory::new(&db)
        .start_time(base + chrono::Duration::hours(20))
        .build()
        .await
        .unwrap();
    let early = CalendarEntryFactory::new(&db)
        .start_time(base + chrono::Duration::hours(5))
        .build()
        .await
        .unwrap();

    let response = app.oneshot(get("/calendar_entries")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![early.id as i64, late.id as i64]);
}
