//! Per-device endpoint token rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered device token for one installed app instance.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DeviceToken {
    /// Owning user (opaque external identifier).
    pub user_id: String,
    /// The endpoint token.
    pub token: String,
    /// Optional device description (platform, model, app version).
    pub device_info: Option<serde_json::Value>,
    /// When the token was registered.
    pub created_at: DateTime<Utc>,
    /// When the token was last refreshed.
    pub updated_at: DateTime<Utc>,
}
