//! # courier-core
//!
//! Core crate for Courier. Contains configuration schemas, domain events,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other Courier crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
