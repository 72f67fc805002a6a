//! Event service.

use sea_orm::DatabaseConnection;

use crate::{
    data::event::EventRepository,
    error::AppError,
    model::event::{CreateEventParam, Event},
};

/// Service providing business logic for events.
pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    /// Creates a new EventService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an event from validated parameters.
    ///
    /// The referenced calendar entry must exist; a violated foreign key
    /// surfaces as a database error.
    ///
    /// # Returns
    /// - `Ok(Event)` - The created event
    /// - `Err(AppError::DbErr)` - Database failure
    pub async fn create(&self, param: CreateEventParam) -> Result<Event, AppError> {
        let repo = EventRepository::new(self.db);
        let event = repo.insert(param).await?;
        Ok(event)
    }

    /// Lists all events.
    ///
    /// # Returns
    /// - `Ok(Vec<Event>)` - All events
    /// - `Err(AppError::DbErr)` - Database failure
    pub async fn list(&self) -> Result<Vec<Event>, AppError> {
        let repo = EventRepository::new(self.db);
        let events = repo.list().await?;
        Ok(events)
    }
}
