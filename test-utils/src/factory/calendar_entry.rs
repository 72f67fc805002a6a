//! Calendar entry factory for creating test calendar entries.

use crate::factory::helpers::next_id;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Base timestamp for factory-generated entries. Each new entry starts one
/// hour after the previous one so ordering-sensitive tests get distinct,
/// monotonically increasing start times by default.
fn default_start_time(id: u64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .expect("valid base date")
        .and_hms_opt(8, 0, 0)
        .expect("valid base time")
        + Duration::hours(id as i64)
}

/// Factory for creating test calendar entries with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::calendar_entry::CalendarEntryFactory;
///
/// let entry = CalendarEntryFactory::new(&db)
///     .title("City council meeting")
///     .is_all_day(true)
///     .build()
///     .await?;
/// ```
pub struct CalendarEntryFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: Option<String>,
    location: Option<String>,
    start_time: NaiveDateTime,
    end_time: Option<NaiveDateTime>,
    is_all_day: bool,
}

impl<'a> CalendarEntryFactory<'a> {
    /// Creates a new CalendarEntryFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Entry {id}"` where id is auto-incremented
    /// - description / location / end_time: `None`
    /// - start_time: a fixed base date offset by the entry's id
    /// - is_all_day: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Entry {}", id),
            description: None,
            location: None,
            start_time: default_start_time(id),
            end_time: None,
            is_all_day: false,
        }
    }

    /// Sets the title for the entry.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description for the entry.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the location for the entry.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the start time for the entry.
    pub fn start_time(mut self, start_time: NaiveDateTime) -> Self {
        self.start_time = start_time;
        self
    }

    /// Sets the end time for the entry.
    pub fn end_time(mut self, end_time: NaiveDateTime) -> Self {
        self.end_time = Some(end_time);
        self
    }

    /// Sets the all-day flag for the entry.
    pub fn is_all_day(mut self, is_all_day: bool) -> Self {
        self.is_all_day = is_all_day;
        self
    }

    /// Builds and inserts the calendar entry into the database.
    ///
    /// # Returns
    /// - `Ok(entity::calendar_entry::Model)` - Created calendar entry entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::calendar_entry::Model, DbErr> {
        entity::calendar_entry::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            location: ActiveValue::Set(self.location),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            is_all_day: ActiveValue::Set(self.is_all_day),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a calendar entry with default values.
///
/// Shorthand for `CalendarEntryFactory::new(db).build().await`.
pub async fn create_calendar_entry(
    db: &DatabaseConnection,
) -> Result<entity::calendar_entry::Model, DbErr> {
    CalendarEntryFactory::new(db).build().await
}
