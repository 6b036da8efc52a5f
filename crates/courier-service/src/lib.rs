//! # courier-service
//!
//! Business logic for Courier: the intake path (validation, persistence,
//! creation-event emission) and the delivery path (endpoint resolution
//! and the lifecycle state machine).

pub mod delivery;
pub mod notification;

#[cfg(test)]
pub(crate) mod testing;

pub use delivery::pipeline::DeliveryPipeline;
pub use delivery::resolver::EndpointResolver;
pub use notification::service::NotificationService;
pub use notification::validate::NotificationSubmission;
