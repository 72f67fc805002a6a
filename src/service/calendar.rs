//! Calendar entry service.

use sea_orm::DatabaseConnection;

use crate::{
    data::calendar_entry::CalendarEntryRepository,
    error::AppError,
    model::calendar::{CalendarEntry, CreateCalendarEntryParam},
};

/// Service providing business logic for calendar entries.
pub struct CalendarService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CalendarService<'a> {
    /// Creates a new CalendarService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a calendar entry from validated parameters.
    ///
    /// # Returns
    /// - `Ok(CalendarEntry)` - The created entry
    /// - `Err(AppError::DbErr)` - Database failure
    pub async fn create(&self, param: CreateCalendarEntryParam) -> Result<CalendarEntry, AppError> {
        let repo = CalendarEntryRepository::new(self.db);
        let entry = repo.insert(param).await?;
        Ok(entry)
    }

    /// Lists all calendar entries ordered by start time ascending.
    ///
    /// # Returns
    /// - `Ok(Vec<CalendarEntry>)` - All entries, earliest first
    /// - `Err(AppError::DbErr)` - Database failure
    pub async fn list(&self) -> Result<Vec<CalendarEntry>, AppError> {
        let repo = CalendarEntryRepository::new(self.db);
        let entries = repo.list_ordered().await?;
        Ok(entries)
    }
}
