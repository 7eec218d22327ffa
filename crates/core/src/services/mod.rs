//! Business logic services.

pub mod notification;

pub use notification::{NotificationPayload, NotificationService};
