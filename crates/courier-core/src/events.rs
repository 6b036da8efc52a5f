//! Domain events emitted by the intake path and consumed by the
//! delivery worker.
//!
//! Creation events flow over an in-process unbounded channel. The channel
//! provides fire-and-forget trigger semantics: the intake path never waits
//! on delivery, and a dropped receiver is logged rather than surfaced to
//! the submitting caller.

use tokio::sync::mpsc;
use uuid::Uuid;

/// Event emitted after a notification document has been persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationCreated {
    /// Identifier of the newly created notification.
    pub notification_id: Uuid,
}

/// Sending half of the creation-event channel.
pub type CreatedSender = mpsc::UnboundedSender<NotificationCreated>;

/// Receiving half of the creation-event channel.
pub type CreatedReceiver = mpsc::UnboundedReceiver<NotificationCreated>;

/// Create the creation-event channel pair.
pub fn created_channel() -> (CreatedSender, CreatedReceiver) {
    mpsc::unbounded_channel()
}
