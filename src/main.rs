//! Courier Server — push-notification dispatch service
//!
//! Main entry point that wires all crates together and starts the
//! server. Every component is constructed explicitly here and injected
//! where it is needed; nothing initializes lazily on first use.

use std::sync::Arc;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use courier_core::config::AppConfig;
use courier_core::error::AppError;
use courier_core::events;
use courier_database::repositories::notification::NotificationStore;
use courier_database::repositories::user::UserDirectory;
use courier_database::{DatabasePool, NotificationRepository, UserRepository, migration};
use courier_push::{DeliveryDispatcher, FcmClient, PushTransport};
use courier_service::{DeliveryPipeline, EndpointResolver, NotificationService};
use courier_worker::DeliveryWorker;

#[tokio::main]
async fn main() {
    let env = std::env::var("COURIER_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Courier v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = DatabasePool::connect(&config.database).await?;
    migration::run_migrations(db.pool()).await?;

    // ── Step 2: Repositories ─────────────────────────────────────
    let store: Arc<dyn NotificationStore> =
        Arc::new(NotificationRepository::new(db.pool().clone()));
    let directory: Arc<dyn UserDirectory> = Arc::new(UserRepository::new(db.pool().clone()));

    // ── Step 3: Push transport + delivery pipeline ───────────────
    let transport: Arc<dyn PushTransport> = Arc::new(FcmClient::new(&config.push)?);
    let dispatcher = DeliveryDispatcher::new(transport);
    let resolver = EndpointResolver::new(Arc::clone(&directory), config.push.token_source);
    let pipeline = Arc::new(DeliveryPipeline::new(
        Arc::clone(&store),
        resolver,
        dispatcher,
    ));

    // ── Step 4: Intake service + creation-event channel ──────────
    let (created_tx, created_rx) = events::created_channel();
    let notification_service = Arc::new(NotificationService::new(Arc::clone(&store), created_tx));

    // ── Step 5: Delivery worker ──────────────────────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let worker_handle = if config.worker.enabled {
        let worker = DeliveryWorker::new(
            pipeline,
            Arc::clone(&store),
            config.worker.clone(),
            created_rx,
        );
        Some(tokio::spawn(worker.run(shutdown_rx)))
    } else {
        tracing::warn!("Delivery worker disabled; notifications will queue as pending");
        None
    };

    // ── Step 6: HTTP server ──────────────────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = courier_api::AppState {
        config: Arc::new(config),
        db: db.clone(),
        notification_service,
    };
    let app = courier_api::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    // ── Step 7: Drain the worker and close the pool ──────────────
    let _ = shutdown_tx.send(true);
    if let Some(handle) = worker_handle {
        let _ = handle.await;
    }
    db.close().await;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Resolve when the process receives Ctrl-C / SIGINT.
async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutdown signal received");
}
