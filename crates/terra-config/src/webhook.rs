//! Outbound webhook used to deliver summary emails.
//!
//! - `WEBHOOK_EMAIL_URL`: target endpoint; notifications are unavailable without it
//! - `WEBHOOK_EMAIL_TOKEN`: optional bearer token sent with each delivery
//! - `WEBHOOK_TIMEOUT_SECS`: request timeout (default: 10)

use std::time::Duration;

use crate::{env_opt, env_or};

#[derive(Clone, Debug, Default)]
pub struct WebhookConfig {
    pub url: Option<String>,
    pub bearer_token: Option<String>,
    pub timeout_secs: u64,
}

impl WebhookConfig {
    pub fn from_env() -> Self {
        Self {
            url: env_opt("WEBHOOK_EMAIL_URL"),
            bearer_token: env_opt("WEBHOOK_EMAIL_TOKEN"),
            timeout_secs: env_or("WEBHOOK_TIMEOUT_SECS", 10),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_never_zero() {
        let config = WebhookConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(1));
    }
}
