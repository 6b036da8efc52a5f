//! # courier-worker
//!
//! Background delivery processing for Courier:
//! - consumes creation events and runs one delivery task per notification
//! - bounds delivery concurrency with a semaphore
//! - periodically re-triggers stale `pending` rows as crash recovery

pub mod runner;

pub use runner::DeliveryWorker;
