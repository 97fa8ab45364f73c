//! Path defaults.

use std::path::PathBuf;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG: &str = "config.toml";

/// Returns the default config file path (`./config.toml`).
#[must_use]
pub fn default_config() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG)
}
