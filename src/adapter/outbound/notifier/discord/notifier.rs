//! Discord webhook dispatcher.

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use tracing::debug;

use super::format::build_payload;
use crate::error::Result;
use crate::port::outbound::notifier::{Alert, AlertDispatcher, DeliveryOutcome};

/// Default embed footer.
pub const DEFAULT_FOOTER: &str = "Simco Market Bulls";

/// Webhook settings.
#[derive(Debug, Clone)]
pub struct DiscordConfig {
    pub webhook_url: String,
    pub footer: String,
}

impl DiscordConfig {
    /// Read the webhook URL from `DISCORD_WEBHOOK_URL`.
    ///
    /// Returns `None` when the variable is unset or blank.
    #[must_use]
    pub fn from_env(footer: Option<String>) -> Option<Self> {
        let webhook_url = std::env::var("DISCORD_WEBHOOK_URL").ok()?;
        if webhook_url.trim().is_empty() {
            return None;
        }
        Some(Self {
            webhook_url,
            footer: footer.unwrap_or_else(|| DEFAULT_FOOTER.to_string()),
        })
    }
}

/// Posts alerts to a Discord webhook.
pub struct DiscordNotifier {
    http: HttpClient,
    config: DiscordConfig,
}

impl DiscordNotifier {
    #[must_use]
    pub fn new(config: DiscordConfig, http: HttpClient) -> Self {
        Self { http, config }
    }
}

#[async_trait]
impl AlertDispatcher for DiscordNotifier {
    async fn dispatch(&self, alert: &Alert) -> Result<DeliveryOutcome> {
        let payload = build_payload(alert, &self.config.footer);
        let response = self
            .http
            .post(&self.config.webhook_url)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), item = %alert.code, "Discord webhook answered");
        if status == StatusCode::NO_CONTENT {
            return Ok(DeliveryOutcome::Delivered);
        }
        let body = response.text().await.unwrap_or_default();
        Ok(DeliveryOutcome::Rejected {
            status: status.as_u16(),
            body,
        })
    }

    fn name(&self) -> &'static str {
        "discord"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Serializes tests that touch the process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn from_env_requires_webhook() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var("DISCORD_WEBHOOK_URL");
        assert!(DiscordConfig::from_env(None).is_none());

        std::env::set_var("DISCORD_WEBHOOK_URL", "  ");
        assert!(DiscordConfig::from_env(None).is_none());
        std::env::remove_var("DISCORD_WEBHOOK_URL");
    }

    #[test]
    fn from_env_uses_default_footer() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("DISCORD_WEBHOOK_URL", "https://discord.com/api/webhooks/1/x");

        let config = DiscordConfig::from_env(None).unwrap();
        assert_eq!(config.footer, DEFAULT_FOOTER);
        let config = DiscordConfig::from_env(Some("Custom".into())).unwrap();
        assert_eq!(config.footer, "Custom");

        std::env::remove_var("DISCORD_WEBHOOK_URL");
    }
}
