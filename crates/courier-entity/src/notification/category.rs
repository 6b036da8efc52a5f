//! Notification category enumeration.

use serde::{Deserialize, Serialize};

/// Category of a notification for client-side routing and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_category", rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum NotificationCategory {
    /// Direct or chat messages.
    Messages,
    /// Incoming request notifications.
    NewRequests,
    /// Payment events.
    Payments,
    /// Promotional content.
    Promotions,
    /// Status changes on existing resources.
    StatusUpdates,
}

impl NotificationCategory {
    /// All valid categories, in wire-format order.
    pub const ALL: [NotificationCategory; 5] = [
        Self::Messages,
        Self::NewRequests,
        Self::Payments,
        Self::Promotions,
        Self::StatusUpdates,
    ];

    /// Return the category as its wire-format string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Messages => "messages",
            Self::NewRequests => "newRequests",
            Self::Payments => "payments",
            Self::Promotions => "promotions",
            Self::StatusUpdates => "statusUpdates",
        }
    }

    /// Parse a wire-format category string.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

impl Default for NotificationCategory {
    /// The fallback category applied when a request omits the field.
    fn default() -> Self {
        Self::Promotions
    }
}

impl std::fmt::Display for NotificationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for category in NotificationCategory::ALL {
            assert_eq!(NotificationCategory::parse(category.as_str()), Some(category));
        }
        assert_eq!(NotificationCategory::parse("bogus"), None);
        assert_eq!(NotificationCategory::parse("newrequests"), None);
    }
}
