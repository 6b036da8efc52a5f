//! Health probe handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database_up = state.db.health_check().await.unwrap_or(false);

    Json(HealthResponse {
        status: if database_up { "ok" } else { "degraded" }.to_string(),
        database: if database_up { "up" } else { "down" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
