use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use simcowatch::domain::error::DomainError;
use simcowatch::domain::{ItemCode, MarketQuote, TickerEntry};
use simcowatch::error::{Error, Result};
use simcowatch::port::MarketFetcher;

/// Scripted listing response for one item.
#[derive(Clone, Debug)]
pub enum Listing {
    Quote(MarketQuote),
    Empty,
    Malformed(DomainError),
    Unavailable,
}

/// Market double with a fixed ticker and per-item listings.
///
/// Tracks how many listing requests are in flight at once so tests can
/// assert on the worker bound.
#[derive(Default)]
pub struct ScriptedMarket {
    ticker: Mutex<Option<Vec<TickerEntry>>>,
    listings: Mutex<HashMap<ItemCode, Listing>>,
    listing_delay: Duration,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    listing_calls: AtomicUsize,
}

impl ScriptedMarket {
    pub fn new(ticker: Vec<TickerEntry>) -> Self {
        Self {
            ticker: Mutex::new(Some(ticker)),
            ..Self::default()
        }
    }

    /// A market whose ticker fetch always fails.
    pub fn offline() -> Self {
        Self::default()
    }

    pub fn with_listing_delay(mut self, delay: Duration) -> Self {
        self.listing_delay = delay;
        self
    }

    pub fn set_listing(&self, code: ItemCode, listing: Listing) {
        self.listings
            .lock()
            .expect("lock listings")
            .insert(code, listing);
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn listing_calls(&self) -> usize {
        self.listing_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MarketFetcher for ScriptedMarket {
    async fn ticker(&self) -> Result<Vec<TickerEntry>> {
        self.ticker
            .lock()
            .expect("lock ticker")
            .clone()
            .ok_or_else(|| Error::BatchFetch("ticker unavailable".into()))
    }

    async fn best_listing(&self, code: ItemCode) -> Result<Option<MarketQuote>> {
        self.listing_calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        if !self.listing_delay.is_zero() {
            tokio::time::sleep(self.listing_delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let listing = self
            .listings
            .lock()
            .expect("lock listings")
            .get(&code)
            .cloned()
            .unwrap_or(Listing::Empty);
        match listing {
            Listing::Quote(quote) => Ok(Some(quote)),
            Listing::Empty => Ok(None),
            Listing::Malformed(e) => Err(e.into()),
            Listing::Unavailable => Err(Error::DependencyUnavailable("listing timeout".into())),
        }
    }

    fn market_name(&self) -> &'static str {
        "scripted"
    }
}
