//! Notification intake: validation and persistence.

pub mod service;
pub mod validate;

pub use service::NotificationService;
pub use validate::NotificationSubmission;
