//! Push delivery configuration.

use serde::{Deserialize, Serialize};

/// Which user-side storage shape the endpoint resolver reads tokens from.
///
/// Deployments provide exactly one of the two shapes; the resolver never
/// performs a hybrid read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenSource {
    /// Flat per-user profile row carrying `fcm_token` / `fcm_tokens` /
    /// `notification_enabled`.
    Profile,
    /// Per-user collection of device-token rows.
    DeviceTokens,
}

/// Push gateway and endpoint resolution configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushConfig {
    /// Base URL of the FCM HTTP v1 API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// FCM project identifier.
    pub project_id: String,
    /// Pre-issued OAuth bearer token for the FCM API. Credential rotation
    /// is owned by the deployment environment, not by this service.
    #[serde(default)]
    pub auth_token: String,
    /// Outbound request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Which user-side shape endpoint tokens are resolved from.
    #[serde(default = "default_token_source")]
    pub token_source: TokenSource,
}

fn default_api_url() -> String {
    "https://fcm.googleapis.com".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_token_source() -> TokenSource {
    TokenSource::Profile
}
