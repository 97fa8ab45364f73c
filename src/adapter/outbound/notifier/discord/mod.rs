//! Discord webhook alerts.

mod format;
mod notifier;

pub use format::{build_payload, risk_color};
pub use notifier::{DiscordConfig, DiscordNotifier, DEFAULT_FOOTER};
