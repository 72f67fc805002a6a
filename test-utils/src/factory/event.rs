//! Event factory for creating test events.
//!
//! Events reference a calendar entry, so callers must either pass an existing
//! entry id or use `helpers::create_event_with_entry` to create both at once.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::event::EventFactory;
///
/// let event = EventFactory::new(&db, entry.id)
///     .title("Street festival")
///     .tags(vec!["music", "food"])
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    calendar_entry_id: i32,
    category: Option<String>,
    tags: Option<Vec<String>>,
    additional_info: Option<String>,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Event {id}"` where id is auto-incremented
    /// - category / tags / additional_info: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `calendar_entry_id` - Id of the calendar entry the event belongs to
    pub fn new(db: &'a DatabaseConnection, calendar_entry_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Event {}", id),
            calendar_entry_id,
            category: None,
            tags: None,
            additional_info: None,
        }
    }

    /// Sets the title for the event.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the category for the event.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the tags for the event.
    pub fn tags(mut self, tags: Vec<impl Into<String>>) -> Self {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the additional info text for the event.
    pub fn additional_info(mut self, additional_info: impl Into<String>) -> Self {
        self.additional_info = Some(additional_info.into());
        self
    }

    /// Builds and inserts the event entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::event::Model)` - Created event entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            title: ActiveValue::Set(self.title),
            calendar_entry_id: ActiveValue::Set(self.calendar_entry_id),
            category: ActiveValue::Set(self.category),
            tags: ActiveValue::Set(self.tags.map(serde_json::Value::from)),
            additional_info: ActiveValue::Set(self.additional_info),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event with default values attached to the given calendar entry.
///
/// Shorthand for `EventFactory::new(db, calendar_entry_id).build().await`.
pub async fn create_event(
    db: &DatabaseConnection,
    calendar_entry_id: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, calendar_entry_id).build().await
}
