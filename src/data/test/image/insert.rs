use super::*;

/// Tests inserting an image record.
///
/// Expected: Ok with name and path persisted as given
#[tokio::test]
async fn inserts_image_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Image)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ImageRepository::new(db);
    let image = repo
        .insert(CreateImageParam {
            file_name: "rathaus.jpg".to_string(),
            file_path: "/uploads/rathaus.jpg".to_string(),
        })
        .await?;

    assert!(image.id > 0);
    assert_eq!(image.file_name, "rathaus.jpg");
    assert_eq!(image.file_path, "/uploads/rathaus.jpg");

    Ok(())
}
