//! Calendar entry data repository for database operations.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::model::calendar::{CalendarEntry, CreateCalendarEntryParam};

/// Repository providing database operations for calendar entries.
pub struct CalendarEntryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CalendarEntryRepository<'a> {
    /// Creates a new CalendarEntryRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new calendar entry.
    ///
    /// # Arguments
    /// - `param` - Validated entry fields
    ///
    /// # Returns
    /// - `Ok(CalendarEntry)` - The created entry with its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert(&self, param: CreateCalendarEntryParam) -> Result<CalendarEntry, DbErr> {
        let entity = entity::calendar_entry::ActiveModel {
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            location: ActiveValue::Set(param.location),
            start_time: ActiveValue::Set(param.start_time),
            end_time: ActiveValue::Set(param.end_time),
            is_all_day: ActiveValue::Set(param.is_all_day),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(CalendarEntry::from_entity(entity))
    }

    /// Gets all calendar entries ordered by start time, earliest first.
    ///
    /// # Returns
    /// - `Ok(Vec<CalendarEntry>)` - All entries (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_ordered(&self) -> Result<Vec<CalendarEntry>, DbErr> {
        let entities = entity::prelude::CalendarEntry::find()
            .order_by_asc(entity::calendar_entry::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(CalendarEntry::from_entity).collect())
    }
}
