//! Delivery dispatcher — single sends and multi-endpoint fan-out.

use std::sync::Arc;

use futures::future::join_all;
use tracing::debug;

use courier_core::result::AppResult;
use courier_entity::notification::Notification;

use crate::message::RenderedMessage;
use crate::transport::PushTransport;

/// A single endpoint's delivery failure within a fan-out.
#[derive(Debug, Clone)]
pub struct EndpointFailure {
    /// The endpoint token that failed.
    pub token: String,
    /// The transport error message.
    pub reason: String,
}

/// Aggregate outcome of a multi-endpoint fan-out.
///
/// Per-endpoint failures are recorded here, never raised: as long as the
/// fan-out call itself completes, the caller receives counts and
/// diagnostics rather than an error.
#[derive(Debug, Clone, Default)]
pub struct FanoutOutcome {
    /// Number of endpoints delivered successfully.
    pub success_count: usize,
    /// Number of endpoints that failed.
    pub failure_count: usize,
    /// Per-endpoint failure detail.
    pub failures: Vec<EndpointFailure>,
}

/// Sends a rendered message to one or many endpoint tokens.
#[derive(Debug, Clone)]
pub struct DeliveryDispatcher {
    transport: Arc<dyn PushTransport>,
}

impl DeliveryDispatcher {
    /// Create a new dispatcher over the given transport.
    pub fn new(transport: Arc<dyn PushTransport>) -> Self {
        Self { transport }
    }

    /// Deliver to a single endpoint. Propagates the transport error on
    /// failure; there is no partial outcome.
    pub async fn send_to_endpoint(
        &self,
        token: &str,
        notification: &Notification,
    ) -> AppResult<String> {
        let message = RenderedMessage::from_notification(notification)?;
        let message_id = self.transport.send(token, &message).await?;
        debug!(notification_id = %notification.id, %message_id, "Delivered to endpoint");
        Ok(message_id)
    }

    /// Deliver to every endpoint independently and aggregate the outcome.
    ///
    /// The message is rendered once and each endpoint is attempted
    /// regardless of how the others fare. A per-endpoint failure never
    /// aborts the remaining sends and never surfaces as an error.
    pub async fn send_to_all(
        &self,
        tokens: &[String],
        notification: &Notification,
    ) -> AppResult<FanoutOutcome> {
        let message = RenderedMessage::from_notification(notification)?;

        let sends = tokens.iter().map(|token| {
            let message = &message;
            async move { (token.clone(), self.transport.send(token, message).await) }
        });

        let mut outcome = FanoutOutcome::default();
        for (token, result) in join_all(sends).await {
            match result {
                Ok(_) => outcome.success_count += 1,
                Err(e) => {
                    outcome.failure_count += 1;
                    outcome.failures.push(EndpointFailure {
                        token,
                        reason: e.message,
                    });
                }
            }
        }

        debug!(
            notification_id = %notification.id,
            success = outcome.success_count,
            failed = outcome.failure_count,
            "Fan-out complete"
        );
        Ok(outcome)
    }
}
