//! SeaORM entity definitions for the city portal database.

pub mod calendar_entry;
pub mod event;
pub mod image;
pub mod user;

pub mod prelude;
