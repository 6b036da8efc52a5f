//! Background delivery worker configuration.

use serde::{Deserialize, Serialize};

/// Delivery worker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Whether the worker is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Number of concurrent delivery tasks.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    /// Interval in seconds between recovery-sweep polls.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_seconds: u64,
    /// Minimum age in seconds before a pending notification is picked up
    /// by the recovery sweep. Keeps the sweep from racing the creation
    /// event under normal operation.
    #[serde(default = "default_sweep_min_age")]
    pub sweep_min_age_seconds: i64,
    /// Maximum number of rows re-triggered per sweep.
    #[serde(default = "default_sweep_batch")]
    pub sweep_batch_size: i64,
}

fn default_true() -> bool {
    true
}

fn default_concurrency() -> usize {
    4
}

fn default_poll_interval() -> u64 {
    30
}

fn default_sweep_min_age() -> i64 {
    60
}

fn default_sweep_batch() -> i64 {
    100
}
