use super::*;

/// Tests listing all image records.
///
/// Expected: Ok with every stored image present
#[tokio::test]
async fn returns_all_images() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Image)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::image::create_image(db).await?;
    let second = factory::image::create_image(db).await?;

    let repo = ImageRepository::new(db);
    let images = repo.list().await?;

    let ids: Vec<i32> = images.iter().map(|image| image.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
