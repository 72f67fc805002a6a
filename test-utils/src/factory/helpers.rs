//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an event together with the calendar entry it belongs to.
///
/// Events carry a foreign key to `calendar_entries`, so this is the shortest
/// way to get a valid event into the database. Both entities are created with
/// default values; use the individual factories to customize either side.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((entry, event))` - The created calendar entry and event
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_with_entry(
    db: &DatabaseConnection,
) -> Result<(entity::calendar_entry::Model, entity::event::Model), DbErr> {
    let entry = crate::factory::calendar_entry::create_calendar_entry(db).await?;
    let event = crate::factory::event::create_event(db, entry.id).await?;

    Ok((entry, event))
}
