//! Deterministic rendering of a notification document into a push message.

use std::collections::BTreeMap;

use courier_core::result::AppResult;
use courier_entity::notification::{Notification, NotificationPriority};

/// Transport-level delivery priority class.
///
/// Only `high` document priority elevates the class; `normal` and `low`
/// both map to the normal class. The mapping is applied once per
/// dispatch, so single- and multi-endpoint sends always carry the same
/// class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryClass {
    /// Elevated delivery (wakes the device).
    High,
    /// Normal delivery.
    Normal,
}

impl DeliveryClass {
    /// Map a document priority to its delivery class.
    pub fn for_priority(priority: NotificationPriority) -> Self {
        match priority {
            NotificationPriority::High => Self::High,
            _ => Self::Normal,
        }
    }
}

/// A push message rendered from a notification document.
///
/// Rendering is a pure function of the document: title and body come
/// from the document's `title`/`message`, and the data payload carries
/// the category, priority, and the optional content/action/metadata
/// fields only when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    /// Display title.
    pub title: String,
    /// Display body.
    pub body: String,
    /// Key-value data payload delivered alongside the visible message.
    pub data: BTreeMap<String, String>,
    /// Transport delivery class.
    pub class: DeliveryClass,
}

impl RenderedMessage {
    /// Render a notification document into a push message.
    pub fn from_notification(notification: &Notification) -> AppResult<Self> {
        let mut data = BTreeMap::new();
        data.insert("type".to_string(), notification.category.as_str().to_string());
        data.insert(
            "priority".to_string(),
            notification.priority.as_str().to_string(),
        );

        if let Some(html) = &notification.content_html {
            data.insert("content_html".to_string(), html.clone());
        }
        if let Some(action) = &notification.action {
            data.insert("action_type".to_string(), action.kind.clone());
            data.insert("action_value".to_string(), action.value.clone());
        }
        if let Some(metadata) = &notification.metadata {
            data.insert("metadata".to_string(), serde_json::to_string(metadata)?);
        }

        Ok(Self {
            title: notification.title.clone(),
            body: notification.message.clone(),
            data,
            class: DeliveryClass::for_priority(notification.priority),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use courier_entity::notification::{
        NotificationAction, NotificationCategory, NotificationStatus,
    };
    use sqlx::types::Json;
    use uuid::Uuid;

    fn notification(priority: NotificationPriority) -> Notification {
        Notification {
            id: Uuid::new_v4(),
            user_id: "u1".to_string(),
            category: NotificationCategory::Payments,
            priority,
            title: "Payment received".to_string(),
            message: "You were paid".to_string(),
            content_html: None,
            action: None,
            fcm_token: None,
            scheduled_at: None,
            metadata: None,
            status: NotificationStatus::Pending,
            error: None,
            attempts: 0,
            created_at: Utc::now(),
            sent_at: None,
        }
    }

    #[test]
    fn test_minimal_render_omits_absent_fields() {
        let rendered = RenderedMessage::from_notification(&notification(
            NotificationPriority::Normal,
        ))
        .unwrap();

        assert_eq!(rendered.title, "Payment received");
        assert_eq!(rendered.body, "You were paid");
        assert_eq!(rendered.data.get("type").unwrap(), "payments");
        assert_eq!(rendered.data.get("priority").unwrap(), "normal");
        assert!(!rendered.data.contains_key("content_html"));
        assert!(!rendered.data.contains_key("action_type"));
        assert!(!rendered.data.contains_key("metadata"));
        assert_eq!(rendered.class, DeliveryClass::Normal);
    }

    #[test]
    fn test_full_render_carries_optional_fields() {
        let mut n = notification(NotificationPriority::High);
        n.content_html = Some("<b>paid</b>".to_string());
        n.action = Some(Json(NotificationAction {
            kind: "open_url".to_string(),
            value: "https://example.com/receipt".to_string(),
        }));
        n.metadata = Some(serde_json::json!({"invoice": 42}));

        let rendered = RenderedMessage::from_notification(&n).unwrap();
        assert_eq!(rendered.data.get("content_html").unwrap(), "<b>paid</b>");
        assert_eq!(rendered.data.get("action_type").unwrap(), "open_url");
        assert_eq!(
            rendered.data.get("action_value").unwrap(),
            "https://example.com/receipt"
        );
        assert_eq!(rendered.data.get("metadata").unwrap(), r#"{"invoice":42}"#);
        assert_eq!(rendered.class, DeliveryClass::High);
    }

    #[test]
    fn test_priority_class_mapping() {
        assert_eq!(
            DeliveryClass::for_priority(NotificationPriority::High),
            DeliveryClass::High
        );
        assert_eq!(
            DeliveryClass::for_priority(NotificationPriority::Normal),
            DeliveryClass::Normal
        );
        assert_eq!(
            DeliveryClass::for_priority(NotificationPriority::Low),
            DeliveryClass::Normal
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let n = notification(NotificationPriority::High);
        let a = RenderedMessage::from_notification(&n).unwrap();
        let b = RenderedMessage::from_notification(&n).unwrap();
        assert_eq!(a, b);
    }
}
