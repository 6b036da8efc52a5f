//! Store traits and their repository implementations.

pub mod notification;
pub mod user;

pub use notification::{NotificationRepository, NotificationStore};
pub use user::{UserDirectory, UserRepository};
