//! Flat user profile carrying push endpoint tokens.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user's push delivery profile.
///
/// Read-only to this service; token registration and rotation belong to
/// the account system.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserProfile {
    /// The user's identifier (opaque external identifier).
    pub id: String,
    /// Primary device token.
    pub fcm_token: Option<String>,
    /// Additional device tokens (multi-device support).
    pub fcm_tokens: Option<Vec<String>>,
    /// Master opt-in flag. Only an explicit `false` suppresses delivery.
    pub notification_enabled: Option<bool>,
}

impl UserProfile {
    /// Check if the user has explicitly disabled notifications.
    pub fn notifications_disabled(&self) -> bool {
        self.notification_enabled == Some(false)
    }
}
