//! Image domain models and parameters.

use serde::{Deserialize, Serialize};

use crate::error::validation::ValidationError;

/// An image reference as stored in the database. The path is an opaque
/// string; nothing checks that it points at a real file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub id: i32,
    pub file_name: String,
    pub file_path: String,
}

impl Image {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::image::Model) -> Self {
        Self {
            id: entity.id,
            file_name: entity.file_name,
            file_path: entity.file_path,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> ImageDto {
        ImageDto {
            id: self.id,
            file_name: self.file_name,
            file_path: self.file_path,
        }
    }
}

/// Parameters for inserting an image.
#[derive(Debug, Clone)]
pub struct CreateImageParam {
    pub file_name: String,
    pub file_path: String,
}

/// Form payload for POST /add_image.
#[derive(Debug, Deserialize)]
pub struct AddImageForm {
    pub file_name: Option<String>,
    pub file_path: Option<String>,
}

impl AddImageForm {
    /// Validates field presence and converts into insert parameters.
    pub fn into_param(self) -> Result<CreateImageParam, ValidationError> {
        Ok(CreateImageParam {
            file_name: self
                .file_name
                .ok_or(ValidationError::MissingField("file_name"))?,
            file_path: self
                .file_path
                .ok_or(ValidationError::MissingField("file_path"))?,
        })
    }
}

/// Image as returned by GET /images.
#[derive(Debug, Serialize)]
pub struct ImageDto {
    pub id: i32,
    pub file_name: String,
    pub file_path: String,
}
