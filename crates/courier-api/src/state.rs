//! Application state shared across all handlers.

use std::sync::Arc;

use courier_core::config::AppConfig;
use courier_database::DatabasePool;
use courier_service::NotificationService;

/// Application state containing all shared dependencies.
///
/// Constructed once at startup and passed to every Axum handler via
/// `State<AppState>`. All fields are cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Database pool (used by the health probe).
    pub db: DatabasePool,
    /// Notification intake service.
    pub notification_service: Arc<NotificationService>,
}
