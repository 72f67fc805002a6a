//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let entry = factory::calendar_entry::create_calendar_entry(&db).await?;
//!
//!     // Create with all dependencies
//!     let (entry, event) = factory::helpers::create_event_with_entry(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::UserFactory::new(&db)
//!     .username("resident")
//!     .role("admin")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `calendar_entry` - Create calendar entry entities
//! - `event` - Create event entities (requires a calendar entry)
//! - `image` - Create image entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod calendar_entry;
pub mod event;
pub mod helpers;
pub mod image;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use calendar_entry::create_calendar_entry;
pub use event::create_event;
pub use image::create_image;
pub use user::create_user;
