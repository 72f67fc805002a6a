use super::*;

/// Tests inserting an event with a tag list.
///
/// Verifies the tags survive the round trip through the JSON column.
///
/// Expected: Ok with tags equal to the input list
#[tokio::test]
async fn inserts_event_and_round_trips_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entry = factory::calendar_entry::create_calendar_entry(db).await?;

    let repo = EventRepository::new(db);
    let event = repo
        .insert(sample_param(entry.id, Some(vec!["a", "b", "c"])))
        .await?;

    assert!(event.id > 0);
    assert_eq!(event.calendar_entry_id, entry.id);
    assert_eq!(
        event.tags,
        Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
    );

    Ok(())
}

/// Tests inserting an event without tags.
///
/// Verifies the column itself is NULL, not an empty JSON array.
///
/// Expected: Ok with a NULL tags column
#[tokio::test]
async fn stores_null_when_tags_are_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entry = factory::calendar_entry::create_calendar_entry(db).await?;

    let repo = EventRepository::new(db);
    let event = repo.insert(sample_param(entry.id, None)).await?;

    assert_eq!(event.tags, None);

    let raw = entity::prelude::Event::find_by_id(event.id)
        .one(db)
        .await?
        .expect("event row exists");
    assert_eq!(raw.tags, None);

    Ok(())
}
