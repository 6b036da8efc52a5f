//! Endpoint resolution — which tokens a notification is delivered to.

use std::collections::HashSet;
use std::sync::Arc;

use courier_core::config::push::TokenSource;
use courier_core::error::AppError;
use courier_core::result::AppResult;
use courier_database::repositories::user::UserDirectory;
use courier_entity::notification::Notification;

/// Resolves the deduplicated set of delivery endpoint tokens for a
/// notification.
///
/// A document carrying an explicit `fcm_token` resolves to exactly that
/// token without consulting the directory. Otherwise one of two
/// configuration-selected read strategies applies — never a hybrid of
/// both.
#[derive(Debug, Clone)]
pub struct EndpointResolver {
    directory: Arc<dyn UserDirectory>,
    source: TokenSource,
}

impl EndpointResolver {
    /// Create a resolver over the given directory and read strategy.
    pub fn new(directory: Arc<dyn UserDirectory>, source: TokenSource) -> Self {
        Self { directory, source }
    }

    /// Resolve the endpoint set for a notification.
    ///
    /// Under the profile strategy a missing user is an error; an
    /// explicitly disabled profile yields the empty set regardless of
    /// the tokens it carries. Under the device-token strategy the token
    /// collection is the only authority, so an unknown user simply has
    /// no endpoints.
    pub async fn resolve(&self, notification: &Notification) -> AppResult<HashSet<String>> {
        if let Some(token) = &notification.fcm_token {
            return Ok(HashSet::from([token.clone()]));
        }

        match self.source {
            TokenSource::Profile => {
                let profile = self
                    .directory
                    .find_profile(&notification.user_id)
                    .await?
                    .ok_or_else(|| {
                        AppError::not_found(format!("User {} not found", notification.user_id))
                    })?;

                if profile.notifications_disabled() {
                    return Ok(HashSet::new());
                }

                let mut tokens = HashSet::new();
                if let Some(token) = profile.fcm_token {
                    if !token.is_empty() {
                        tokens.insert(token);
                    }
                }
                for token in profile.fcm_tokens.unwrap_or_default() {
                    if !token.is_empty() {
                        tokens.insert(token);
                    }
                }
                Ok(tokens)
            }
            TokenSource::DeviceTokens => Ok(self
                .directory
                .device_tokens(&notification.user_id)
                .await?
                .into_iter()
                .map(|row| row.token)
                .filter(|token| !token.is_empty())
                .collect()),
        }
    }
}
