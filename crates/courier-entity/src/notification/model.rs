//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use super::action::NotificationAction;
use super::category::NotificationCategory;
use super::priority::NotificationPriority;
use super::status::NotificationStatus;

/// A persisted notification document.
///
/// After creation, the delivery pipeline exclusively owns the write path
/// for `status`, `sent_at`, `error`, and `attempts`; every other field is
/// written exactly once by the intake path.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier, assigned at creation.
    pub id: Uuid,
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
    pub action: Option<Json<NotificationAction>>,
    /// Explicit delivery endpoint token; bypasses user-profile resolution.
    pub fcm_token: Option<String>,
    /// Optional deferred send time.
    pub scheduled_at: Option<DateTime<Utc>>,
    /// Additional free-form metadata.
    pub metadata: Option<serde_json::Value>,
    /// Lifecycle status.
    pub status: NotificationStatus,
    /// Delivery error text; present iff `status` is `Failed`.
    pub error: Option<String>,
    /// Number of delivery attempt cycles. Only ever increases.
    pub attempts: i32,
    /// When the document was created.
    pub created_at: DateTime<Utc>,
    /// When delivery succeeded; present iff `status` is `Sent`.
    pub sent_at: Option<DateTime<Utc>>,
}

impl Notification {
    /// Check if the document is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Check if delivery is deferred past `now`.
    pub fn is_deferred(&self, now: DateTime<Utc>) -> bool {
        self.scheduled_at.map(|at| at > now).unwrap_or(false)
    }
}
