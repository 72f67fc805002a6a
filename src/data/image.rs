//! Image data repository for database operations.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::image::{CreateImageParam, Image};

/// Repository providing database operations for image records.
pub struct ImageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ImageRepository<'a> {
    /// Creates a new ImageRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new image record.
    ///
    /// # Arguments
    /// - `param` - File name and path for the record
    ///
    /// # Returns
    /// - `Ok(Image)` - The created image with its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert(&self, param: CreateImageParam) -> Result<Image, DbErr> {
        let entity = entity::image::ActiveModel {
            file_name: ActiveValue::Set(param.file_name),
            file_path: ActiveValue::Set(param.file_path),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Image::from_entity(entity))
    }

    /// Gets all image records.
    ///
    /// # Returns
    /// - `Ok(Vec<Image>)` - All images (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn list(&self) -> Result<Vec<Image>, DbErr> {
        let entities = entity::prelude::Image::find().all(self.db).await?;

        Ok(entities.into_iter().map(Image::from_entity).collect())
    }
}
