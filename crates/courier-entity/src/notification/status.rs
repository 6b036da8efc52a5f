//! Notification lifecycle status enumeration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a notification document.
///
/// `Sent` and `Failed` are terminal: once either is committed, no further
/// transition occurs. The terminal check is the idempotency guard for
/// duplicate trigger invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    /// Ready to be delivered now.
    Pending,
    /// Deferred to a future `scheduled_at` time.
    Scheduled,
    /// Successfully delivered (terminal).
    Sent,
    /// Delivery failed (terminal).
    Failed,
}

impl NotificationStatus {
    /// Check if the status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Sent | Self::Failed)
    }

    /// Compute the initial status for a document created at `now`:
    /// `Scheduled` iff a future `scheduled_at` is present, else `Pending`.
    pub fn initial_for(scheduled_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        match scheduled_at {
            Some(at) if at > now => Self::Scheduled,
            _ => Self::Pending,
        }
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Scheduled => "scheduled",
            Self::Sent => "sent",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for NotificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_initial_status_future_schedule() {
        let now = Utc::now();
        assert_eq!(
            NotificationStatus::initial_for(Some(now + Duration::hours(1)), now),
            NotificationStatus::Scheduled
        );
    }

    #[test]
    fn test_initial_status_past_or_absent_schedule() {
        let now = Utc::now();
        assert_eq!(
            NotificationStatus::initial_for(Some(now - Duration::hours(1)), now),
            NotificationStatus::Pending
        );
        assert_eq!(
            NotificationStatus::initial_for(None, now),
            NotificationStatus::Pending
        );
    }

    #[test]
    fn test_terminal_states() {
        assert!(NotificationStatus::Sent.is_terminal());
        assert!(NotificationStatus::Failed.is_terminal());
        assert!(!NotificationStatus::Pending.is_terminal());
        assert!(!NotificationStatus::Scheduled.is_terminal());
    }
}
