//! Push transport trait.

use async_trait::async_trait;

use courier_core::result::AppResult;

use crate::message::RenderedMessage;

/// One-message, one-endpoint push delivery.
///
/// Implementations own wire protocol, authentication, and timeouts.
/// The dispatcher composes this into multi-endpoint fan-out.
#[async_trait]
pub trait PushTransport: Send + Sync + std::fmt::Debug + 'static {
    /// Deliver a rendered message to a single endpoint token.
    ///
    /// Returns the provider-assigned message identifier on success and a
    /// `Transport` error on failure; there is no partial outcome.
    async fn send(&self, token: &str, message: &RenderedMessage) -> AppResult<String>;
}
