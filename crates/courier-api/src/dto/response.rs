//! Response DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Body of a successful notification creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationCreatedResponse {
    /// Always `true` on the 201 path.
    pub success: bool,
    /// Identifier of the created notification.
    pub notification_id: Uuid,
    /// Human-readable confirmation.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: `"ok"` or `"degraded"`.
    pub status: String,
    /// Database status: `"up"` or `"down"`.
    pub database: String,
    /// Service version.
    pub version: String,
}
