//! Notification store trait and its PostgreSQL implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use courier_core::error::{AppError, ErrorKind};
use courier_core::result::AppResult;
use courier_entity::notification::{Notification, NotificationRequest, NotificationStatus};

/// Durable store of notification documents.
///
/// The intake service and the delivery pipeline depend on this trait so
/// lifecycle logic can be exercised against an in-memory double; the
/// PostgreSQL repository below is the production backing. Updates are
/// last-write-wins per field; there is no optimistic concurrency.
#[async_trait]
pub trait NotificationStore: Send + Sync + std::fmt::Debug + 'static {
    /// Persist a new document: assigns the identifier, stamps
    /// `created_at`, zeroes `attempts`, and computes the initial status
    /// from `scheduled_at`.
    async fn create(&self, request: &NotificationRequest) -> AppResult<Notification>;

    /// Fetch a document by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Notification>>;

    /// Atomically add one to the attempt counter.
    async fn increment_attempts(&self, id: Uuid) -> AppResult<()>;

    /// Commit the terminal success transition: `sent` + `sent_at`.
    async fn mark_sent(&self, id: Uuid, sent_at: DateTime<Utc>) -> AppResult<()>;

    /// Commit the terminal failure transition: `failed` + `error`.
    async fn mark_failed(&self, id: Uuid, error: &str) -> AppResult<()>;

    /// Ids of `pending` documents created before `cutoff`, oldest first.
    /// Used by the recovery sweep; `scheduled` documents are never
    /// returned.
    async fn list_pending_before(
        &self,
        cutoff: DateTime<Utc>,
        limit: i64,
    ) -> AppResult<Vec<Uuid>>;
}

/// PostgreSQL-backed [`NotificationStore`].
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationStore for NotificationRepository {
    async fn create(&self, request: &NotificationRequest) -> AppResult<Notification> {
        let now = Utc::now();
        let status = NotificationStatus::initial_for(request.scheduled_at, now);

        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications \
             (id, user_id, category, priority, title, message, content_html, action, \
              fcm_token, scheduled_at, metadata, status, attempts, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, 0, $13) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&request.user_id)
        .bind(request.category)
        .bind(request.priority)
        .bind(&request.title)
        .bind(&request.message)
        .bind(&request.content_html)
        .bind(request.action.clone().map(Json))
        .bind(&request.fcm_token)
        .bind(request.scheduled_at)
        .bind(&request.metadata)
        .bind(status)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create notification", e)
        })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Notification>> {
        sqlx::query_as::<_, Notification>("SELECT * FROM notifications WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to fetch notification", e)
            })
    }

    async fn increment_attempts(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE notifications SET attempts = attempts + 1 WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to increment attempts", e)
            })?;
        Ok(())
    }

    async fn mark_sent(&self, id: Uuid, sent_at: DateTime<Utc>) -> AppResult<()> {
        sqlx::query(
            "UPDATE notifications SET status = 'sent', sent_at = $2, error = NULL WHERE id = $1",
        )
        .bind(id)
        .bind(sent_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark sent", e))?;
        Ok(())
    }

    async fn mark_failed(&self, id: Uuid, error: &str) -> AppResult<()> {
        sqlx::query("UPDATE notifications SET status = 'failed', error = $2 WHERE id = $1")
            .bind(id)
            .bind(error)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark failed", e))?;
        Ok(())
    }

    async fn list_pending_before(
        &self,
        cutoff: DateTime<Utc>,
        limit: i64,
    ) -> AppResult<Vec<Uuid>> {
        sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM notifications \
             WHERE status = 'pending' AND created_at < $1 \
             ORDER BY created_at ASC LIMIT $2",
        )
        .bind(cutoff)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list pending notifications", e)
        })
    }
}
