//! User directory trait and its PostgreSQL implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use courier_core::error::{AppError, ErrorKind};
use courier_core::result::AppResult;
use courier_entity::user::{DeviceToken, UserProfile};

/// Read-only view of the user-side endpoint-token shapes.
///
/// Deployments back exactly one of the two read methods with real data;
/// the resolver picks which to consult from configuration.
#[async_trait]
pub trait UserDirectory: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch a user's flat delivery profile, if the user exists.
    async fn find_profile(&self, user_id: &str) -> AppResult<Option<UserProfile>>;

    /// Fetch a user's registered device-token rows.
    async fn device_tokens(&self, user_id: &str) -> AppResult<Vec<DeviceToken>>;
}

/// PostgreSQL-backed [`UserDirectory`].
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for UserRepository {
    async fn find_profile(&self, user_id: &str) -> AppResult<Option<UserProfile>> {
        sqlx::query_as::<_, UserProfile>(
            "SELECT id, fcm_token, fcm_tokens, notification_enabled FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch profile", e))
    }

    async fn device_tokens(&self, user_id: &str) -> AppResult<Vec<DeviceToken>> {
        sqlx::query_as::<_, DeviceToken>(
            "SELECT user_id, token, device_info, created_at, updated_at \
             FROM device_tokens WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list device tokens", e)
        })
    }
}
