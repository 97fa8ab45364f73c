//! Poll loop configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::application::poller::{PollerSettings, DEFAULT_WORKERS};

/// `[poller]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct PollerConfig {
    /// Items processed concurrently within a cycle.
    #[serde(default = "default_workers")]
    pub workers: usize,
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    /// Delay before retrying after a failed ticker fetch.
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,
}

const fn default_workers() -> usize {
    DEFAULT_WORKERS
}

const fn default_interval_secs() -> u64 {
    60
}

const fn default_retry_delay_secs() -> u64 {
    10
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            interval_secs: default_interval_secs(),
            retry_delay_secs: default_retry_delay_secs(),
        }
    }
}

impl PollerConfig {
    #[must_use]
    pub fn settings(&self) -> PollerSettings {
        PollerSettings {
            workers: self.workers,
            interval: Duration::from_secs(self.interval_secs),
            retry_delay: Duration::from_secs(self.retry_delay_secs),
        }
    }
}
