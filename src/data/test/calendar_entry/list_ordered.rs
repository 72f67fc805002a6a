use super::*;

/// Tests that listing returns entries ordered by start time ascending,
/// regardless of insertion order.
///
/// Expected: Ok with entries sorted earliest first
#[tokio::test]
async fn returns_entries_ordered_by_start_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CalendarEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let late = CalendarEntryFactory::new(db).start_time(at(18)).build().await?;
    let early = CalendarEntryFactory::new(db).start_time(at(7)).build().await?;
    let middle = CalendarEntryFactory::new(db).start_time(at(12)).build().await?;

    let repo = CalendarEntryRepository::new(db);
    let entries = repo.list_ordered().await?;

    let ids: Vec<i32> = entries.iter().map(|entry| entry.id).collect();
    assert_eq!(ids, vec![early.id, middle.id, late.id]);

    Ok(())
}

/// Tests listing with an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_list_when_no_entries_exist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CalendarEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CalendarEntryRepository::new(db);
    let entries = repo.list_ordered().await?;
    assert!(entries.is_empty());

    Ok(())
}
