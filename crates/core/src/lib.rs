//! Core business logic for openpledge-notifications.

pub mod services;

pub use services::*;
