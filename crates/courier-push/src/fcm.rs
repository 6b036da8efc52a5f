//! FCM HTTP v1 transport client.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

use courier_core::config::push::PushConfig;
use courier_core::error::{AppError, ErrorKind};
use courier_core::result::AppResult;

use crate::message::{DeliveryClass, RenderedMessage};
use crate::transport::PushTransport;

/// Body of a successful `messages:send` response.
#[derive(Debug, Deserialize)]
struct SendResponse {
    /// Resource name of the accepted message, e.g.
    /// `projects/my-project/messages/0:123…`.
    name: String,
}

/// FCM HTTP v1 client.
///
/// Authenticates with a pre-issued OAuth bearer token from configuration;
/// credential acquisition and rotation belong to the deployment
/// environment.
#[derive(Debug, Clone)]
pub struct FcmClient {
    http: reqwest::Client,
    send_url: String,
    auth_token: String,
}

impl FcmClient {
    /// Build a client from push configuration.
    pub fn new(config: &PushConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Transport, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            http,
            send_url: format!(
                "{}/v1/projects/{}/messages:send",
                config.api_url.trim_end_matches('/'),
                config.project_id
            ),
            auth_token: config.auth_token.clone(),
        })
    }

    /// Build the `messages:send` request body for one endpoint token.
    fn message_payload(token: &str, message: &RenderedMessage) -> Value {
        let (android_priority, apns_priority) = match message.class {
            DeliveryClass::High => ("HIGH", "10"),
            DeliveryClass::Normal => ("NORMAL", "5"),
        };

        json!({
            "message": {
                "token": token,
                "notification": {
                    "title": message.title,
                    "body": message.body,
                },
                "data": message.data,
                "android": {
                    "priority": android_priority,
                },
                "apns": {
                    "headers": {
                        "apns-priority": apns_priority,
                    },
                },
            }
        })
    }
}

#[async_trait]
impl PushTransport for FcmClient {
    async fn send(&self, token: &str, message: &RenderedMessage) -> AppResult<String> {
        let response = self
            .http
            .post(&self.send_url)
            .bearer_auth(&self.auth_token)
            .json(&Self::message_payload(token, message))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Transport,
                    format!("Push request failed: {e}"),
                    e,
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::transport(format!(
                "Push gateway returned {status}: {body}"
            )));
        }

        let body: SendResponse = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Transport,
                format!("Malformed push gateway response: {e}"),
                e,
            )
        })?;
        Ok(body.name)
    }
}
