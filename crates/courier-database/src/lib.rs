//! # courier-database
//!
//! PostgreSQL connection management, schema migrations, and the store
//! traits consumed by the intake and delivery paths together with their
//! concrete repository implementations.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::notification::{NotificationRepository, NotificationStore};
pub use repositories::user::{UserDirectory, UserRepository};
