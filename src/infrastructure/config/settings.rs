//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; secrets such as
//! `FIREBASE_AUTH_TOKEN` are only ever read from the environment.
//!
//! # Example
//!
//! ```no_run
//! use simcowatch::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::alerts::AlertsConfig;
use super::logging::LoggingConfig;
use super::poller::PollerConfig;
use super::store::StoreConfig;
use crate::adapter::outbound::simcompanies::SimCompaniesConfig;
use crate::error::{ConfigError, Result};

/// Upper bound on concurrent item pipelines.
pub const MAX_WORKERS: usize = 64;

/// Main application configuration.
///
/// Every table is optional; an empty file polls realm 0 into the memory
/// store and alerts through Discord when a webhook is set.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Market API settings.
    #[serde(default)]
    pub market: SimCompaniesConfig,

    /// Poll loop timing and concurrency.
    #[serde(default)]
    pub poller: PollerConfig,

    /// Price history backend.
    #[serde(default)]
    pub store: StoreConfig,

    /// Alert channels.
    #[serde(default)]
    pub alerts: AlertsConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Loads the Firebase auth token from `FIREBASE_AUTH_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        if let StoreConfig::Firebase(firebase) = &mut config.store {
            firebase.auth_token = std::env::var("FIREBASE_AUTH_TOKEN")
                .ok()
                .filter(|token| !token.trim().is_empty());
        }

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.market.api_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "api_url" }.into());
        }
        url::Url::parse(&self.market.api_url).map_err(|e| ConfigError::InvalidValue {
            field: "api_url",
            reason: e.to_string(),
        })?;
        if self.market.http.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if self.poller.workers == 0 || self.poller.workers > MAX_WORKERS {
            return Err(ConfigError::InvalidValue {
                field: "workers",
                reason: format!("must be between 1 and {MAX_WORKERS}"),
            }
            .into());
        }
        if self.poller.interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.poller.retry_delay_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retry_delay_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if let StoreConfig::Firebase(firebase) = &self.store {
            if firebase.database_url.trim().is_empty() {
                return Err(ConfigError::MissingField {
                    field: "database_url",
                }
                .into());
            }
            url::Url::parse(&firebase.database_url).map_err(|e| ConfigError::InvalidValue {
                field: "database_url",
                reason: e.to_string(),
            })?;
        }

        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: "must be \"pretty\" or \"json\"".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
