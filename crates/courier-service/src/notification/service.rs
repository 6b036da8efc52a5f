//! Notification intake service.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use courier_core::error::AppError;
use courier_core::events::{CreatedSender, NotificationCreated};
use courier_core::result::AppResult;
use courier_database::repositories::notification::NotificationStore;
use courier_entity::notification::Notification;

use super::validate::{self, NotificationSubmission};

/// Accepts raw submissions, persists them, and emits creation events.
///
/// Callers only ever observe creation success or failure here; delivery
/// outcome is visible solely through the persisted document's `status`
/// and `error` fields.
#[derive(Debug, Clone)]
pub struct NotificationService {
    store: Arc<dyn NotificationStore>,
    events: CreatedSender,
}

impl NotificationService {
    /// Create a new intake service.
    pub fn new(store: Arc<dyn NotificationStore>, events: CreatedSender) -> Self {
        Self { store, events }
    }

    /// Validate and persist a submission, then fire the creation event.
    ///
    /// Event emission is fire-and-forget: a dropped worker never fails
    /// the caller, since the recovery sweep re-triggers pending rows.
    pub async fn submit(&self, submission: NotificationSubmission) -> AppResult<Notification> {
        let request = validate::normalize(submission)?;
        let notification = self.store.create(&request).await?;

        info!(
            notification_id = %notification.id,
            user_id = %notification.user_id,
            status = %notification.status,
            "Notification created"
        );

        let event = NotificationCreated {
            notification_id: notification.id,
        };
        if self.events.send(event).is_err() {
            warn!(
                notification_id = %notification.id,
                "Delivery worker unavailable; recovery sweep will pick this up"
            );
        }

        Ok(notification)
    }

    /// Fetch a persisted document by id.
    pub async fn get(&self, id: Uuid) -> AppResult<Notification> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Notification {id} not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryStore;
    use chrono::{Duration, Utc};
    use courier_core::events;
    use courier_entity::notification::NotificationStatus;

    fn submission() -> NotificationSubmission {
        NotificationSubmission {
            title: Some("Hi".to_string()),
            message: Some("Test".to_string()),
            user_id: Some("u1".to_string()),
            priority: Some("high".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_submit_persists_and_emits_event() {
        let store = Arc::new(MemoryStore::default());
        let (tx, mut rx) = events::created_channel();
        let service = NotificationService::new(store.clone(), tx);

        let created = service.submit(submission()).await.unwrap();
        assert_eq!(created.status, NotificationStatus::Pending);
        assert_eq!(created.attempts, 0);

        let event = rx.try_recv().unwrap();
        assert_eq!(event.notification_id, created.id);
        assert!(store.find_by_id(created.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_submit_future_schedule_starts_scheduled() {
        let store = Arc::new(MemoryStore::default());
        let (tx, _rx) = events::created_channel();
        let service = NotificationService::new(store, tx);

        let mut s = submission();
        s.scheduled_at = Some(Utc::now() + Duration::hours(2));
        let created = service.submit(s).await.unwrap();
        assert_eq!(created.status, NotificationStatus::Scheduled);
    }

    #[tokio::test]
    async fn test_invalid_submission_is_rejected_before_persistence() {
        let store = Arc::new(MemoryStore::default());
        let (tx, mut rx) = events::created_channel();
        let service = NotificationService::new(store.clone(), tx);

        let err = service
            .submit(NotificationSubmission::default())
            .await
            .unwrap_err();
        assert!(err.message.contains("Missing required fields"));
        assert!(rx.try_recv().is_err());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_submit_survives_dropped_worker() {
        let store = Arc::new(MemoryStore::default());
        let (tx, rx) = events::created_channel();
        drop(rx);
        let service = NotificationService::new(store, tx);

        let created = service.submit(submission()).await.unwrap();
        assert_eq!(created.status, NotificationStatus::Pending);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let store = Arc::new(MemoryStore::default());
        let (tx, _rx) = events::created_channel();
        let service = NotificationService::new(store, tx);

        let err = service.get(uuid::Uuid::new_v4()).await.unwrap_err();
        assert!(err.message.contains("not found"));
    }
}
