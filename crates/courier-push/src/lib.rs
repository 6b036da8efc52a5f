//! # courier-push
//!
//! The push delivery boundary: deterministic message rendering, the
//! [`PushTransport`] trait, the FCM HTTP v1 client, and the
//! [`DeliveryDispatcher`] that fans a message out to one or many
//! endpoint tokens and aggregates the outcome.

pub mod dispatcher;
pub mod fcm;
pub mod message;
pub mod transport;

pub use dispatcher::{DeliveryDispatcher, EndpointFailure, FanoutOutcome};
pub use fcm::FcmClient;
pub use message::{DeliveryClass, RenderedMessage};
pub use transport::PushTransport;
