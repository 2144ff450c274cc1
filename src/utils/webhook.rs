//! Client for the email webhook.
//!
//! The webhook receives a JSON document and takes care of rendering and
//! sending the email. Any non-2xx answer counts as a failed delivery.

use anyhow::{Result, anyhow};
use reqwest::Client;
use serde::Serialize;

use terra_config::WebhookConfig;

#[derive(Clone, Debug)]
pub struct WebhookClient {
    client: Client,
    config: WebhookConfig,
}

impl WebhookClient {
    pub fn new(config: WebhookConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }

    pub fn is_configured(&self) -> bool {
        self.config.url.is_some()
    }

    /// Posts `payload` and returns the HTTP status the webhook answered with.
    ///
    /// # Errors
    ///
    /// Fails when no URL is configured, the request cannot be sent, or the
    /// webhook answers with a non-success status.
    pub async fn post<T: Serialize + ?Sized>(&self, payload: &T) -> Result<u16> {
        let url = self
            .config
            .url
            .as_deref()
            .ok_or_else(|| anyhow!("WEBHOOK_EMAIL_URL is not configured"))?;

        let mut request = self.client.post(url).json(payload);
        if let Some(token) = self.config.bearer_token.as_deref() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("Email webhook returned status {}", status));
        }

        Ok(status.as_u16())
    }
}
