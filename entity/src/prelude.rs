pub use super::calendar_entry::Entity as CalendarEntry;
pub use super::event::Entity as Event;
pub use super::image::Entity as Image;
pub use super::user::Entity as User;
