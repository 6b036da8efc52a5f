//! Tap action attached to a notification.

use serde::{Deserialize, Serialize};

/// Action to perform when the recipient taps the notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationAction {
    /// Action type: `"open_url"`, `"navigate"`, `"deep_link"`, etc.
    #[serde(rename = "type")]
    pub kind: String,
    /// Action value: URL, route, identifier, etc.
    pub value: String,
}
