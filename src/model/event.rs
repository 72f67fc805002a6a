//! Event domain models and parameters.
//!
//! Events hang off a calendar entry and carry an optional tag list. Tags
//! arrive as a single comma-separated form field and are stored as a nullable
//! JSON array of strings.

use sea_orm::DbErr;
use serde::{Deserialize, Serialize};

use crate::error::validation::ValidationError;

/// An event as stored in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub calendar_entry_id: i32,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub additional_info: Option<String>,
}

impl Event {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Event)` - The converted event
    /// - `Err(DbErr::Json)` - The stored tags column was not a JSON array of strings
    pub fn from_entity(entity: entity::event::Model) -> Result<Self, DbErr> {
        let tags = entity
            .tags
            .map(|value| serde_json::from_value(value).map_err(|e| DbErr::Json(e.to_string())))
            .transpose()?;

        Ok(Self {
            id: entity.id,
            title: entity.title,
            calendar_entry_id: entity.calendar_entry_id,
            category: entity.category,
            tags,
            additional_info: entity.additional_info,
        })
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            title: self.title,
            calendar_entry_id: self.calendar_entry_id,
            category: self.category,
            tags: self.tags,
            additional_info: self.additional_info,
        }
    }
}

/// Parameters for inserting an event.
#[derive(Debug, Clone)]
pub struct CreateEventParam {
    pub title: String,
    pub calendar_entry_id: i32,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub additional_info: Option<String>,
}

/// Form payload for POST /add_event.
#[derive(Debug, Deserialize)]
pub struct AddEventForm {
    pub title: Option<String>,
    pub calendar_entry_id: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub additional_info: Option<String>,
}

impl AddEventForm {
    /// Validates field presence, parses the calendar entry id, and splits the
    /// tag list into insert parameters.
    pub fn into_param(self) -> Result<CreateEventParam, ValidationError> {
        let title = self.title.ok_or(ValidationError::MissingField("title"))?;
        let raw_id = self
            .calendar_entry_id
            .ok_or(ValidationError::MissingField("calendar_entry_id"))?;
        let calendar_entry_id =
            raw_id
                .parse::<i32>()
                .map_err(|_| ValidationError::InvalidField {
                    field: "calendar_entry_id",
                    reason: format!("'{}' is not an integer", raw_id),
                })?;

        Ok(CreateEventParam {
            title,
            calendar_entry_id,
            category: self.category,
            tags: parse_tags(self.tags.as_deref()),
            additional_info: self.additional_info,
        })
    }
}

/// Event as returned by GET /events.
#[derive(Debug, Serialize)]
pub struct EventDto {
    pub id: i32,
    pub title: String,
    pub calendar_entry_id: i32,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub additional_info: Option<String>,
}

/// Splits a comma-separated tag field into a deduplicated tag list.
///
/// Whitespace around each tag is trimmed and empty pieces are dropped, so
/// `"a, b ,,c"` becomes `["a", "b", "c"]`. An absent field or one with no
/// usable tags yields `None`, which the data layer stores as NULL.
pub fn parse_tags(raw: Option<&str>) -> Option<Vec<String>> {
    let raw = raw?;

    let mut tags: Vec<String> = Vec::new();
    for piece in raw.split(',') {
        let tag = piece.trim();
        if !tag.is_empty() && !tags.iter().any(|existing| existing == tag) {
            tags.push(tag.to_string());
        }
    }

    if tags.is_empty() {
        None
    } else {
        Some(tags)
    }
}
