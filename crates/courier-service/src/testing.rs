//! In-memory doubles for the store, directory, and transport seams.
//!
//! These back the lifecycle tests: the store can be scripted to fail
//! specific operations so the best-effort failure paths are reachable
//! without a database.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use courier_core::error::AppError;
use courier_core::result::AppResult;
use courier_database::repositories::notification::NotificationStore;
use courier_database::repositories::user::UserDirectory;
use courier_entity::notification::{
    Notification, NotificationCategory, NotificationPriority, NotificationRequest,
    NotificationStatus,
};
use courier_entity::user::{DeviceToken, UserProfile};
use courier_push::{PushTransport, RenderedMessage};

/// A minimal valid request addressed to `user_id`.
pub fn request_to(user_id: &str) -> NotificationRequest {
    NotificationRequest {
        user_id: user_id.to_string(),
        category: NotificationCategory::Messages,
        priority: NotificationPriority::Normal,
        title: "Hi".to_string(),
        message: "Test".to_string(),
        content_html: None,
        action: None,
        fcm_token: None,
        scheduled_at: None,
        metadata: None,
    }
}

/// A minimal pending document addressed to `user_id`.
pub fn notification_to(user_id: &str) -> Notification {
    Notification {
        id: Uuid::new_v4(),
        user_id: user_id.to_string(),
        category: NotificationCategory::Messages,
        priority: NotificationPriority::Normal,
        title: "Hi".to_string(),
        message: "Test".to_string(),
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

/// In-memory [`NotificationStore`] with scriptable failures.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Mutex<HashMap<Uuid, Notification>>,
    increment_fails: AtomicBool,
    mark_failed_fails: AtomicBool,
}

impl MemoryStore {
    /// Make `increment_attempts` return a database error.
    pub fn fail_increment_attempts(&self) {
        self.increment_fails.store(true, Ordering::SeqCst);
    }

    /// Make `mark_failed` return a database error.
    pub fn fail_mark_failed(&self) {
        self.mark_failed_fails.store(true, Ordering::SeqCst);
    }

    /// Whether no documents have been stored.
    pub fn is_empty(&self) -> bool {
        self.rows.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl NotificationStore for MemoryStore {
    async fn create(&self, request: &NotificationRequest) -> AppResult<Notification> {
        let now = Utc::now();
        let notification = Notification {
            id: Uuid::new_v4(),
            user_id: request.user_id.clone(),
            category: request.category,
            priority: request.priority,
            title: request.title.clone(),
            message: request.message.clone(),
            content_html: request.content_html.clone(),
            action: request.action.clone().map(sqlx::types::Json),
            fcm_token: request.fcm_token.clone(),
            scheduled_at: request.scheduled_at,
            metadata: request.metadata.clone(),
            status: NotificationStatus::initial_for(request.scheduled_at, now),
            error: None,
            attempts: 0,
            created_at: now,
            sent_at: None,
        };
        self.rows
            .lock()
            .unwrap()
            .insert(notification.id, notification.clone());
        Ok(notification)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Notification>> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn increment_attempts(&self, id: Uuid) -> AppResult<()> {
        if self.increment_fails.load(Ordering::SeqCst) {
            return Err(AppError::database("simulated store outage"));
        }
        if let Some(row) = self.rows.lock().unwrap().get_mut(&id) {
            row.attempts += 1;
        }
        Ok(())
    }

    async fn mark_sent(&self, id: Uuid, sent_at: DateTime<Utc>) -> AppResult<()> {
        if let Some(row) = self.rows.lock().unwrap().get_mut(&id) {
            row.status = NotificationStatus::Sent;
            row.sent_at = Some(sent_at);
            row.error = None;
        }
        Ok(())
    }

    async fn mark_failed(&self, id: Uuid, error: &str) -> AppResult<()> {
        if self.mark_failed_fails.load(Ordering::SeqCst) {
            return Err(AppError::database("simulated store outage"));
        }
        if let Some(row) = self.rows.lock().unwrap().get_mut(&id) {
            row.status = NotificationStatus::Failed;
            row.error = Some(error.to_string());
        }
        Ok(())
    }

    async fn list_pending_before(
        &self,
        cutoff: DateTime<Utc>,
        limit: i64,
    ) -> AppResult<Vec<Uuid>> {
        let rows = self.rows.lock().unwrap();
        let mut pending: Vec<&Notification> = rows
            .values()
            .filter(|n| n.status == NotificationStatus::Pending && n.created_at < cutoff)
            .collect();
        pending.sort_by_key(|n| n.created_at);
        Ok(pending
            .into_iter()
            .take(limit as usize)
            .map(|n| n.id)
            .collect())
    }
}

/// In-memory [`UserDirectory`] built up from test fixtures.
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    profiles: HashMap<String, UserProfile>,
    devices: HashMap<String, Vec<DeviceToken>>,
}

impl MemoryDirectory {
    /// Add a flat profile row.
    pub fn with_profile(
        mut self,
        user_id: &str,
        fcm_token: Option<&str>,
        fcm_tokens: &[&str],
        notification_enabled: Option<bool>,
    ) -> Self {
        self.profiles.insert(
            user_id.to_string(),
            UserProfile {
                id: user_id.to_string(),
                fcm_token: fcm_token.map(|t| t.to_string()),
                fcm_tokens: if fcm_tokens.is_empty() {
                    None
                } else {
                    Some(fcm_tokens.iter().map(|t| t.to_string()).collect())
                },
                notification_enabled,
            },
        );
        self
    }

    /// Add device-token rows.
    pub fn with_device_tokens(mut self, user_id: &str, tokens: &[&str]) -> Self {
        let now = Utc::now();
        self.devices.insert(
            user_id.to_string(),
            tokens
                .iter()
                .map(|t| DeviceToken {
                    user_id: user_id.to_string(),
                    token: t.to_string(),
                    device_info: None,
                    created_at: now,
                    updated_at: now,
                })
                .collect(),
        );
        self
    }
}

#[async_trait]
impl UserDirectory for MemoryDirectory {
    async fn find_profile(&self, user_id: &str) -> AppResult<Option<UserProfile>> {
        Ok(self.profiles.get(user_id).cloned())
    }

    async fn device_tokens(&self, user_id: &str) -> AppResult<Vec<DeviceToken>> {
        Ok(self.devices.get(user_id).cloned().unwrap_or_default())
    }
}

/// Transport double that fails exactly the configured tokens.
#[derive(Debug, Default)]
pub struct FlakyTransport {
    failing: HashSet<String>,
    sent: Mutex<Vec<String>>,
}

impl FlakyTransport {
    /// A transport that fails sends to the given tokens.
    pub fn failing(tokens: &[&str]) -> Self {
        Self {
            failing: tokens.iter().map(|t| t.to_string()).collect(),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Tokens successfully sent to, in send order.
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl PushTransport for FlakyTransport {
    async fn send(&self, token: &str, _message: &RenderedMessage) -> AppResult<String> {
        if self.failing.contains(token) {
            return Err(AppError::transport(format!(
                "Requested entity was not found: {token}"
            )));
        }
        self.sent.lock().unwrap().push(token.to_string());
        Ok(format!("projects/test/messages/{token}"))
    }
}
