//! The poll loop.
//!
//! Every cycle fetches the ticker once and fans the entries out to a
//! bounded set of concurrent item pipelines. A failed ticker fetch
//! abandons the cycle and the loop retries after a fixed delay.

use std::sync::Arc;
use std::time::Duration;

use futures_util::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use super::pipeline::{ItemOutcome, ItemPipeline};
use crate::domain::TimeBucket;
use crate::error::Result;
use crate::port::outbound::market::MarketFetcher;

/// Default number of items processed at once.
pub const DEFAULT_WORKERS: usize = 10;

/// Timing and concurrency for the poll loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollerSettings {
    pub workers: usize,
    /// Pause after a completed cycle.
    pub interval: Duration,
    /// Pause after a failed ticker fetch.
    pub retry_delay: Duration,
}

impl Default for PollerSettings {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            interval: Duration::from_secs(60),
            retry_delay: Duration::from_secs(10),
        }
    }
}

/// Tally of one poll cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub items: usize,
    pub recorded: usize,
    pub alerted: usize,
    pub skipped: usize,
    pub no_listing: usize,
    pub undefined: usize,
}

impl CycleReport {
    fn tally(&mut self, outcome: &ItemOutcome) {
        self.items += 1;
        match outcome {
            ItemOutcome::NoListing => self.no_listing += 1,
            ItemOutcome::Skipped { .. } => self.skipped += 1,
            ItemOutcome::Undefined => self.undefined += 1,
            ItemOutcome::Evaluated {
                recorded, alerted, ..
            } => {
                self.recorded += usize::from(*recorded);
                self.alerted += usize::from(*alerted);
            }
        }
    }
}

/// Drives poll cycles over a market.
pub struct Poller {
    market: Arc<dyn MarketFetcher>,
    pipeline: Arc<ItemPipeline>,
    settings: PollerSettings,
}

impl Poller {
    #[must_use]
    pub fn new(
        market: Arc<dyn MarketFetcher>,
        pipeline: Arc<ItemPipeline>,
        settings: PollerSettings,
    ) -> Self {
        Self {
            market,
            pipeline,
            settings,
        }
    }

    #[must_use]
    pub fn settings(&self) -> PollerSettings {
        self.settings
    }

    /// Run one cycle: fetch the ticker and process every entry.
    ///
    /// Returns once every item has finished.
    ///
    /// # Errors
    ///
    /// Returns the ticker fetch error; no item is processed in that case.
    pub async fn run_cycle(&self) -> Result<CycleReport> {
        let entries = self.market.ticker().await?;
        info!(
            market = self.market.market_name(),
            items = entries.len(),
            workers = self.settings.workers,
            "Poll cycle started"
        );

        let workers = self.settings.workers.max(1);
        let report = stream::iter(entries)
            .map(|entry| {
                let pipeline = Arc::clone(&self.pipeline);
                async move {
                    let bucket = TimeBucket::now();
                    pipeline.process(entry, &bucket).await
                }
            })
            .buffer_unordered(workers)
            .fold(CycleReport::default(), |mut report, outcome| async move {
                report.tally(&outcome);
                report
            })
            .await;

        info!(
            items = report.items,
            recorded = report.recorded,
            alerted = report.alerted,
            skipped = report.skipped,
            no_listing = report.no_listing,
            undefined = report.undefined,
            "Poll cycle finished"
        );
        Ok(report)
    }

    /// Poll forever.
    ///
    /// Cancellation is up to the caller, usually by racing this future
    /// against a shutdown signal.
    pub async fn run(&self) {
        loop {
            let pause = match self.run_cycle().await {
                Ok(_) => self.settings.interval,
                Err(e) => {
                    warn!(
                        error = %e,
                        retry_in_secs = self.settings.retry_delay.as_secs(),
                        "Poll cycle failed"
                    );
                    self.settings.retry_delay
                }
            };
            debug!(secs = pause.as_secs(), "Sleeping until next cycle");
            tokio::time::sleep(pause).await;
        }
    }
}
