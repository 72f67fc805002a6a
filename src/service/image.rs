//! Image service.

use sea_orm::DatabaseConnection;

use crate::{
    data::image::ImageRepository,
    error::AppError,
    model::image::{CreateImageParam, Image},
};

/// Service providing business logic for image records.
pub struct ImageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ImageService<'a> {
    /// Creates a new ImageService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an image record from validated parameters.
    ///
    /// # Returns
    /// - `Ok(Image)` - The created record
    /// - `Err(AppError::DbErr)` - Database failure
    pub async fn create(&self, param: CreateImageParam) -> Result<Image, AppError> {
        let repo = ImageRepository::new(self.db);
        let image = repo.insert(param).await?;
        Ok(image)
    }

    /// Lists all image records.
    ///
    /// # Returns
    /// - `Ok(Vec<Image>)` - All images
    /// - `Err(AppError::DbErr)` - Database failure
    pub async fn list(&self) -> Result<Vec<Image>, AppError> {
        let repo = ImageRepository::new(self.db);
        let images = repo.list().await?;
        Ok(images)
    }
}
