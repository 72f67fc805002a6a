//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! entity in the application. Repositories use SeaORM entity models internally and
//! return domain models to keep the business logic layer free of persistence types.

pub mod calendar_entry;
pub mod event;
pub mod image;
pub mod user;

#[cfg(test)]
mod test;
