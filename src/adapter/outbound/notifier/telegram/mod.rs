//! Telegram alerts.
//!
//! Requires the `telegram` feature to be enabled.

mod format;
mod notifier;

pub use format::{escape_markdown, format_alert_message};
pub use notifier::{TelegramConfig, TelegramNotifier};
