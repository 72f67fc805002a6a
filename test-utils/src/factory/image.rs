//! Image factory for creating test image records.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test images with customizable fields.
pub struct ImageFactory<'a> {
    db: &'a DatabaseConnection,
    file_name: String,
    file_path: String,
}

impl<'a> ImageFactory<'a> {
    /// Creates a new ImageFactory with default values.
    ///
    /// Defaults:
    /// - file_name: `"image_{id}.png"` where id is auto-incremented
    /// - file_path: `"/uploads/image_{id}.png"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            file_name: format!("image_{}.png", id),
            file_path: format!("/uploads/image_{}.png", id),
        }
    }

    /// Sets the file name for the image.
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Sets the file path for the image.
    pub fn file_path(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = file_path.into();
        self
    }

    /// Builds and inserts the image entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::image::Model)` - Created image entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::image::Model, DbErr> {
        entity::image::ActiveModel {
            file_name: ActiveValue::Set(self.file_name),
            file_path: ActiveValue::Set(self.file_path),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an image with default values.
///
/// Shorthand for `ImageFactory::new(db).build().await`.
pub async fn create_image(db: &DatabaseConnection) -> Result<entity::image::Model, DbErr> {
    ImageFactory::new(db).build().await
}
