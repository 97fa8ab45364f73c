//! Telegram alert dispatcher.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ParseMode;

use super::format::format_alert_message;
use crate::error::{Error, Result};
use crate::port::outbound::notifier::{Alert, AlertDispatcher, DeliveryOutcome};

/// Bot credentials and target chat.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Target chat ID for alerts.
    pub chat_id: i64,
}

impl TelegramConfig {
    /// Create configuration from environment variables.
    ///
    /// Reads `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID`. Returns `None` if
    /// either is missing or invalid.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let bot_token = std::env::var("TELEGRAM_BOT_TOKEN").ok()?;
        let chat_id = std::env::var("TELEGRAM_CHAT_ID")
            .ok()
            .and_then(|s| s.parse().ok())?;

        Some(Self { bot_token, chat_id })
    }
}

/// Sends alerts to a Telegram chat.
pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    #[must_use]
    pub fn new(config: TelegramConfig) -> Self {
        Self {
            bot: Bot::new(config.bot_token),
            chat_id: ChatId(config.chat_id),
        }
    }
}

#[async_trait]
impl AlertDispatcher for TelegramNotifier {
    async fn dispatch(&self, alert: &Alert) -> Result<DeliveryOutcome> {
        self.bot
            .send_message(self.chat_id, format_alert_message(alert))
            .parse_mode(ParseMode::MarkdownV2)
            .await
            .map_err(|e| Error::AlertDelivery(e.to_string()))?;
        Ok(DeliveryOutcome::Delivered)
    }

    fn name(&self) -> &'static str {
        "telegram"
    }
}
