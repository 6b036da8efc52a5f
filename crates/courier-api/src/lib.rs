//! # courier-api
//!
//! HTTP API layer for Courier built on Axum.
//!
//! Provides the notification intake and inspection endpoints, the
//! health probe, CORS, request tracing, and domain-error → HTTP
//! response mapping.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
