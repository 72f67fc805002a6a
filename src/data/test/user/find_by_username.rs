use super::*;

/// Tests looking up an existing user by username.
///
/// Expected: Ok(Some) with the stored fields
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo.insert(sample_param("bea")).await?;

    let found = repo.find_by_username("bea").await?;
    assert_eq!(found, Some(created));

    Ok(())
}

/// Tests looking up a username that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let found = repo.find_by_username("nobody").await?;
    assert_eq!(found, None);

    Ok(())
}
