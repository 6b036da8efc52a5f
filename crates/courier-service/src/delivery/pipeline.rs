//! The delivery lifecycle state machine.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use courier_core::result::AppResult;
use courier_database::repositories::notification::NotificationStore;
use courier_push::DeliveryDispatcher;

use super::resolver::EndpointResolver;

/// Drives one notification per invocation through
/// pending/scheduled → sent/failed.
///
/// Trigger delivery is at-least-once, so `deliver` may run more than
/// once for the same document; the terminal-state check is the
/// idempotency guard that makes duplicates harmless. `attempts` may
/// over-count under truly concurrent duplicates — it is a diagnostic
/// counter, not a correctness gate.
#[derive(Debug, Clone)]
pub struct DeliveryPipeline {
    store: Arc<dyn NotificationStore>,
    resolver: EndpointResolver,
    dispatcher: DeliveryDispatcher,
}

impl DeliveryPipeline {
    /// Create a new delivery pipeline.
    pub fn new(
        store: Arc<dyn NotificationStore>,
        resolver: EndpointResolver,
        dispatcher: DeliveryDispatcher,
    ) -> Self {
        Self {
            store,
            resolver,
            dispatcher,
        }
    }

    /// Drive one notification through the lifecycle.
    ///
    /// Never panics the caller and never returns an error: any failure
    /// escaping the attempt is converted into a best-effort `failed`
    /// write. If that write itself fails, the document is left
    /// non-terminal for external reconciliation.
    pub async fn deliver(&self, id: Uuid) {
        if let Err(e) = self.try_deliver(id).await {
            warn!(notification_id = %id, error = %e, "Delivery failed");
            if let Err(write_err) = self.store.mark_failed(id, &e.message).await {
                error!(
                    notification_id = %id,
                    error = %write_err,
                    "Could not record delivery failure; document left non-terminal"
                );
            }
        }
    }

    async fn try_deliver(&self, id: Uuid) -> AppResult<()> {
        let Some(notification) = self.store.find_by_id(id).await? else {
            warn!(notification_id = %id, "Triggered for unknown notification");
            return Ok(());
        };

        // Deferred documents are skipped; there is no re-trigger path
        // once the scheduled time arrives.
        if notification.is_deferred(Utc::now()) {
            debug!(notification_id = %id, "Scheduled for later; skipping");
            return Ok(());
        }

        // Idempotency guard for duplicate trigger delivery.
        if notification.is_terminal() {
            debug!(
                notification_id = %id,
                status = %notification.status,
                "Already processed; skipping"
            );
            return Ok(());
        }

        // Committed before dispatch so a crash mid-delivery still leaves
        // an accurate attempt count.
        self.store.increment_attempts(id).await?;

        let tokens: Vec<String> = self
            .resolver
            .resolve(&notification)
            .await?
            .into_iter()
            .collect();

        if tokens.is_empty() {
            info!(
                notification_id = %id,
                user_id = %notification.user_id,
                "No delivery endpoints available"
            );
            self.store
                .mark_failed(id, "No delivery endpoints available")
                .await?;
            return Ok(());
        }

        match tokens.as_slice() {
            [token] => {
                self.dispatcher.send_to_endpoint(token, &notification).await?;
            }
            _ => {
                // Completing the fan-out counts as success even when
                // individual endpoints fail; those failures are
                // diagnostic only.
                let outcome = self.dispatcher.send_to_all(&tokens, &notification).await?;
                for failure in &outcome.failures {
                    warn!(
                        notification_id = %id,
                        token = %failure.token,
                        reason = %failure.reason,
                        "Endpoint delivery failed"
                    );
                }
                info!(
                    notification_id = %id,
                    success = outcome.success_count,
                    failed = outcome.failure_count,
                    "Fan-out delivery finished"
                );
            }
        }

        self.store.mark_sent(id, Utc::now()).await?;
        info!(notification_id = %id, "Notification sent");
        Ok(())
    }
}
