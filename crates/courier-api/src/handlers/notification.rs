//! Notification intake and inspection handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use courier_entity::notification::Notification;
use courier_service::NotificationSubmission;

use crate::dto::response::{ApiResponse, NotificationCreatedResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/notifications
///
/// Accepts a raw submission, returns 201 with the assigned id. Callers
/// never see delivery outcome here; that is observable only through the
/// persisted document.
pub async fn create_notification(
    State(state): State<AppState>,
    Json(submission): Json<NotificationSubmission>,
) -> Result<(StatusCode, Json<NotificationCreatedResponse>), ApiError> {
    let notification = state.notification_service.submit(submission).await?;
    Ok((
        StatusCode::CREATED,
        Json(NotificationCreatedResponse {
            success: true,
            notification_id: notification.id,
            message: "Notification created successfully".to_string(),
        }),
    ))
}

/// GET /api/notifications/{id}
pub async fn get_notification(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Notification>>, ApiError> {
    let notification = state.notification_service.get(id).await?;
    Ok(Json(ApiResponse::ok(notification)))
}
