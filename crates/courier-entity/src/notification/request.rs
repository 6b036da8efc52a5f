//! Normalized notification request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::action::NotificationAction;
use super::category::NotificationCategory;
use super::priority::NotificationPriority;

/// A validated, normalized notification request.
///
/// Produced only by the intake validator; the store turns it into a
/// persisted [`super::Notification`] by assigning the identifier, the
/// creation timestamp, and the initial status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationRequest {
    /// The recipient user (opaque external identifier).
    pub user_id: String,
    /// Notification category.
    pub category: NotificationCategory,
    /// Priority level.
    pub priority: NotificationPriority,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub message: String,
    /// Optional HTML content.
    pub content_html: Option<String>,
    /// Optional tap action.
    pub action: Option<NotificationAction>,
    /// Explicit delivery endpoint token; bypasses user-profile resolution.
    pub fcm_token: Option<String>,
    /// Optional deferred send time.
    pub scheduled_at: Option<DateTime<Utc>>,
    /// Additional free-form metadata.
    pub metadata: Option<serde_json::Value>,
}
