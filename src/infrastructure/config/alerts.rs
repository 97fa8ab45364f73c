//! Alert channel configuration.
//!
//! Channels are switched on here; their credentials come from the
//! environment.

use serde::Deserialize;

/// `[alerts]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct AlertsConfig {
    /// Post to `DISCORD_WEBHOOK_URL` when set.
    #[serde(default = "default_true")]
    pub discord: bool,
    /// Discord embed footer.
    #[serde(default)]
    pub footer: Option<String>,
    /// Send to `TELEGRAM_CHAT_ID` when the bot token is set.
    #[serde(default)]
    pub telegram: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            discord: true,
            footer: None,
            telegram: false,
        }
    }
}
