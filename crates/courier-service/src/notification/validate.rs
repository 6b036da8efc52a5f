//! Request validation and normalization.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use courier_core::error::AppError;
use courier_core::result::AppResult;
use courier_entity::notification::{
    NotificationAction, NotificationCategory, NotificationPriority, NotificationRequest,
};

/// Raw notification submission as received on the wire.
///
/// Every field is optional at the serde layer so that validation can
/// report precise faults instead of failing during deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationSubmission {
    /// Notification category (wire name `type`).
    #[serde(rename = "type")]
    pub category: Option<String>,
    /// Priority level.
    pub priority: Option<String>,
    /// Notification title.
    pub title: Option<String>,
    /// Notification body text.
    pub message: Option<String>,
    /// Optional HTML content.
    pub content_html: Option<String>,
    /// Optional tap action.
    pub action: Option<NotificationAction>,
    /// Target user id.
    pub user_id: Option<String>,
    /// Explicit endpoint token; bypasses user-profile resolution.
    pub fcm_token: Option<String>,
    /// Deferred send time (RFC 3339).
    pub scheduled_at: Option<DateTime<Utc>>,
    /// Free-form metadata.
    pub metadata: Option<serde_json::Value>,
}

/// Validate and normalize a raw submission.
///
/// Pure transform, no I/O. All missing required fields are collected
/// into one diagnostic. An omitted category falls back to `promotions`;
/// an absent or unrecognized priority is silently coerced to `normal`
/// rather than rejected.
pub fn normalize(submission: NotificationSubmission) -> AppResult<NotificationRequest> {
    let (title, message, user_id) = match (
        non_empty(submission.title),
        non_empty(submission.message),
        non_empty(submission.user_id),
    ) {
        (Some(title), Some(message), Some(user_id)) => (title, message, user_id),
        (title, message, user_id) => {
            let mut missing = Vec::new();
            if title.is_none() {
                missing.push("title");
            }
            if message.is_none() {
                missing.push("message");
            }
            if user_id.is_none() {
                missing.push("user_id");
            }
            return Err(AppError::validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }
    };

    let category = match submission.category.as_deref() {
        None => NotificationCategory::default(),
        Some(raw) => NotificationCategory::parse(raw).ok_or_else(|| {
            AppError::validation(format!(
                "Invalid notification type. Must be one of: {}",
                NotificationCategory::ALL.map(|c| c.as_str()).join(", ")
            ))
        })?,
    };

    let priority = submission
        .priority
        .as_deref()
        .and_then(NotificationPriority::parse)
        .unwrap_or_default();

    Ok(NotificationRequest {
        user_id,
        category,
        priority,
        title,
        message,
        content_html: submission.content_html,
        action: submission.action,
        fcm_token: non_empty(submission.fcm_token),
        scheduled_at: submission.scheduled_at,
        metadata: submission.metadata,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> NotificationSubmission {
        NotificationSubmission {
            title: Some("Hi".to_string()),
            message: Some("Test".to_string()),
            user_id: Some("u1".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_all_missing_fields_reported_together() {
        let err = normalize(NotificationSubmission::default()).unwrap_err();
        assert_eq!(
            err.message,
            "Missing required fields: title, message, user_id"
        );
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let mut submission = minimal();
        submission.message = Some(String::new());
        let err = normalize(submission).unwrap_err();
        assert_eq!(err.message, "Missing required fields: message");
    }

    #[test]
    fn test_omitted_category_defaults_to_promotions() {
        let request = normalize(minimal()).unwrap();
        assert_eq!(request.category, NotificationCategory::Promotions);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let mut submission = minimal();
        submission.category = Some("marketing".to_string());
        let err = normalize(submission).unwrap_err();
        assert!(err.message.starts_with("Invalid notification type"));
        assert!(err.message.contains("statusUpdates"));
    }

    #[test]
    fn test_priority_silently_coerced_to_normal() {
        let request = normalize(minimal()).unwrap();
        assert_eq!(request.priority, NotificationPriority::Normal);

        let mut submission = minimal();
        submission.priority = Some("urgent".to_string());
        let request = normalize(submission).unwrap();
        assert_eq!(request.priority, NotificationPriority::Normal);
    }

    #[test]
    fn test_recognized_priority_preserved() {
        let mut submission = minimal();
        submission.priority = Some("low".to_string());
        let request = normalize(submission).unwrap();
        assert_eq!(request.priority, NotificationPriority::Low);
    }

    #[test]
    fn test_high_priority_request_without_type() {
        let mut submission = minimal();
        submission.priority = Some("high".to_string());
        let request = normalize(submission).unwrap();
        assert_eq!(request.category, NotificationCategory::Promotions);
        assert_eq!(request.priority, NotificationPriority::High);
        assert_eq!(request.title, "Hi");
        assert_eq!(request.message, "Test");
        assert_eq!(request.user_id, "u1");
    }
}
