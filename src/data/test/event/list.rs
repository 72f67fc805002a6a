use super::*;

/// Tests listing all events.
///
/// Expected: Ok with every stored event present
#[tokio::test]
async fn returns_all_events() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_entry, first) = factory::helpers::create_event_with_entry(db).await?;
    let (_entry, second) = factory::helpers::create_event_with_entry(db).await?;

    let repo = EventRepository::new(db);
    let events = repo.list().await?;

    let ids: Vec<i32> = events.iter().map(|event| event.id).collect();
    assert!(ids.contains(&first.id));
    assert!(ids.contains(&second.id));
    assert_eq!(events.len(), 2);

    Ok(())
}
