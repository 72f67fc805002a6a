use super::*;

/// Tests inserting a calendar entry with every field populated.
///
/// Expected: Ok with all fields persisted
#[tokio::test]
async fn inserts_entry_with_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CalendarEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CalendarEntryRepository::new(db);
    let entry = repo
        .insert(CreateCalendarEntryParam {
            title: "City council meeting".to_string(),
            description: Some("Budget review".to_string()),
            location: Some("Town hall".to_string()),
            start_time: at(9),
            end_time: Some(at(11)),
            is_all_day: false,
        })
        .await?;

    assert!(entry.id > 0);
    assert_eq!(entry.title, "City council meeting");
    assert_eq!(entry.description.as_deref(), Some("Budget review"));
    assert_eq!(entry.location.as_deref(), Some("Town hall"));
    assert_eq!(entry.start_time, at(9));
    assert_eq!(entry.end_time, Some(at(11)));
    assert!(!entry.is_all_day);

    Ok(())
}

/// Tests inserting a minimal entry: optional fields stay NULL.
///
/// Expected: Ok with description, location, and end_time absent
#[tokio::test]
async fn optional_fields_default_to_null() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CalendarEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CalendarEntryRepository::new(db);
    let entry = repo
        .insert(CreateCalendarEntryParam {
            title: "Street cleaning".to_string(),
            description: None,
            location: None,
            start_time: at(6),
            end_time: None,
            is_all_day: true,
        })
        .await?;

    assert_eq!(entry.description, None);
    assert_eq!(entry.location, None);
    assert_eq!(entry.end_time, None);
    assert!(entry.is_all_day);

    Ok(())
}
