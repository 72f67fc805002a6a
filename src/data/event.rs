//! Event data repository for database operations.
//!
//! Tags cross this boundary in both directions: parameter tag lists are
//! serialized into the JSON column on insert, and stored JSON arrays are
//! deserialized back into `Vec<String>` when reading.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::event::{CreateEventParam, Event};

/// Repository providing database operations for events.
pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    /// Creates a new EventRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new event.
    ///
    /// An empty tag list has already been collapsed to `None` by the form
    /// layer, so NULL lands in the column rather than an empty JSON array.
    ///
    /// # Arguments
    /// - `param` - Validated event fields
    ///
    /// # Returns
    /// - `Ok(Event)` - The created event with its generated id
    /// - `Err(DbErr)` - Database error during insert (including a foreign key
    ///   violation when the calendar entry does not exist)
    pub async fn insert(&self, param: CreateEventParam) -> Result<Event, DbErr> {
        let entity = entity::event::ActiveModel {
            title: ActiveValue::Set(param.title),
            calendar_entry_id: ActiveValue::Set(param.calendar_entry_id),
            category: ActiveValue::Set(param.category),
            tags: ActiveValue::Set(param.tags.map(serde_json::Value::from)),
            additional_info: ActiveValue::Set(param.additional_info),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Event::from_entity(entity)
    }

    /// Gets all events.
    ///
    /// # Returns
    /// - `Ok(Vec<Event>)` - All events (empty if none exist)
    /// - `Err(DbErr)` - Database error during query or tag deserialization
    pub async fn list(&self) -> Result<Vec<Event>, DbErr> {
        let entities = entity::prelude::Event::find().all(self.db).await?;

        entities.into_iter().map(Event::from_entity).collect()
    }
}
