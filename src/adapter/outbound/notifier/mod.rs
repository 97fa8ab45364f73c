//! Alert channel adapters.

pub mod discord;
pub mod format;
#[cfg(feature = "telegram")]
pub mod telegram;

pub use discord::{DiscordConfig, DiscordNotifier};
#[cfg(feature = "telegram")]
pub use telegram::{TelegramConfig, TelegramNotifier};
