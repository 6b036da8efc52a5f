//! Route definitions for the Courier HTTP API.
//!
//! Notification routes are mounted under `/api`; the health probe sits
//! at the root. Method mismatches on a matched path (e.g. GET on the
//! intake route) answer 405 through Axum's method routing.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", notification_routes())
        .route("/health", get(handlers::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Notification intake and inspection endpoints.
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            post(handlers::notification::create_notification),
        )
        .route(
            "/notifications/{id}",
            get(handlers::notification::get_notification),
        )
}
