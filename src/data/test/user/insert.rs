use super::*;

/// Tests inserting a new user.
///
/// Verifies that the repository stores every field as given (the hash is
/// never re-derived at this layer) and that the database assigns an id.
///
/// Expected: Ok with all fields persisted verbatim
#[tokio::test]
async fn inserts_user_and_stores_hash_verbatim() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.insert(sample_param("anna")).await?;

    assert!(user.id > 0);
    assert_eq!(user.username, "anna");
    assert_eq!(user.email, "anna@example.com");
    assert_eq!(user.password_hash, "$2b$12$abcdefghijklmnopqrstuv");
    assert_eq!(user.role, "user");

    Ok(())
}

/// Tests that a duplicate username is rejected by the unique constraint.
///
/// Verifies that the second insert fails with a unique constraint violation
/// and that no second row is committed.
///
/// Expected: Err carrying SqlErr::UniqueConstraintViolation, one row total
#[tokio::test]
async fn duplicate_username_is_a_unique_violation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.insert(sample_param("anna")).await?;

    let err = repo.insert(sample_param("anna")).await.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    let rows = entity::prelude::User::find().all(db).await?;
    assert_eq!(rows.len(), 1);

    Ok(())
}
