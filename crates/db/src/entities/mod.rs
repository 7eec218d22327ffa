//! Database entities.

pub mod notification;
pub mod pledge;
pub mod record;

pub use notification::Entity as Notification;
pub use pledge::Entity as Pledge;
pub use record::Record;
