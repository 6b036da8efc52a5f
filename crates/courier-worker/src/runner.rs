//! Delivery worker — main loop consuming creation events and sweeping
//! stale rows.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::{Semaphore, watch};
use tokio::time;
use tracing::{debug, error, info};
use uuid::Uuid;

use courier_core::config::worker::WorkerConfig;
use courier_core::events::CreatedReceiver;
use courier_database::repositories::notification::NotificationStore;
use courier_service::DeliveryPipeline;

/// Runs delivery tasks in response to creation events.
///
/// Each event spawns an independent lifecycle task, bounded by a
/// concurrency semaphore. A periodic sweep re-triggers `pending` rows
/// older than a grace period, which covers deliveries lost to a crash
/// or a dropped channel; together with the event path this makes
/// trigger delivery at-least-once, which the pipeline's terminal-state
/// guard is built to absorb. The sweep deliberately never selects
/// `scheduled` rows.
#[derive(Debug)]
pub struct DeliveryWorker {
    pipeline: Arc<DeliveryPipeline>,
    store: Arc<dyn NotificationStore>,
    config: WorkerConfig,
    events: CreatedReceiver,
}

impl DeliveryWorker {
    /// Create a new delivery worker.
    pub fn new(
        pipeline: Arc<DeliveryPipeline>,
        store: Arc<dyn NotificationStore>,
        config: WorkerConfig,
        events: CreatedReceiver,
    ) -> Self {
        Self {
            pipeline,
            store,
            config,
            events,
        }
    }

    /// Run until the shutdown signal flips, then drain in-flight tasks.
    pub async fn run(mut self, mut cancel: watch::Receiver<bool>) {
        info!(
            concurrency = self.config.concurrency,
            poll_interval = self.config.poll_interval_seconds,
            "Delivery worker started"
        );

        let semaphore = Arc::new(Semaphore::new(self.config.concurrency));

        let mut sweep = time::interval(Duration::from_secs(self.config.poll_interval_seconds));
        sweep.set_missed_tick_behavior(time::MissedTickBehavior::Delay);
        // The first tick of an interval fires immediately; skip it so a
        // freshly started worker does not race its own event stream.
        sweep.tick().await;

        loop {
            tokio::select! {
                _ = cancel.changed() => {
                    if *cancel.borrow() {
                        info!("Delivery worker received shutdown signal");
                        break;
                    }
                }
                event = self.events.recv() => {
                    match event {
                        Some(event) => {
                            self.spawn_delivery(event.notification_id, &semaphore).await;
                        }
                        None => {
                            info!("Creation-event channel closed");
                            break;
                        }
                    }
                }
                _ = sweep.tick() => {
                    self.run_sweep(&semaphore).await;
                }
            }
        }

        info!("Delivery worker waiting for in-flight deliveries...");
        let permits = self.config.concurrency as u32;
        let _ = time::timeout(Duration::from_secs(30), semaphore.acquire_many(permits)).await;
        info!("Delivery worker shut down");
    }

    /// Spawn one delivery task, waiting for a free concurrency slot.
    async fn spawn_delivery(&self, id: Uuid, semaphore: &Arc<Semaphore>) {
        let permit = match Arc::clone(semaphore).acquire_owned().await {
            Ok(permit) => permit,
            // The semaphore is never closed while the worker runs.
            Err(_) => return,
        };

        let pipeline = Arc::clone(&self.pipeline);
        tokio::spawn(async move {
            let _permit = permit;
            pipeline.deliver(id).await;
        });
    }

    /// Re-trigger stale pending rows.
    async fn run_sweep(&self, semaphore: &Arc<Semaphore>) {
        let cutoff = Utc::now() - chrono::Duration::seconds(self.config.sweep_min_age_seconds);

        match self
            .store
            .list_pending_before(cutoff, self.config.sweep_batch_size)
            .await
        {
            Ok(ids) if ids.is_empty() => {
                debug!("Recovery sweep found nothing to re-trigger");
            }
            Ok(ids) => {
                info!(count = ids.len(), "Recovery sweep re-triggering stale notifications");
                for id in ids {
                    self.spawn_delivery(id, semaphore).await;
                }
            }
            Err(e) => {
                error!(error = %e, "Recovery sweep query failed");
            }
        }
    }
}
