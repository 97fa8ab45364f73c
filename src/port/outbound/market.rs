//! Market data port.

use async_trait::async_trait;

use crate::domain::{ItemCode, MarketQuote, TickerEntry};
use crate::error::Result;

/// Read-only access to current market snapshots.
#[async_trait]
pub trait MarketFetcher: Send + Sync {
    /// Fetch the current ticker: one price per traded item.
    ///
    /// Entries that fail validation are dropped by the implementation.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::BatchFetch`] when the ticker cannot be
    /// retrieved; the caller abandons the whole poll cycle.
    async fn ticker(&self) -> Result<Vec<TickerEntry>>;

    /// Fetch the cheapest listing for an item. `None` means no listing.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::domain::error::DomainError`] for a malformed
    /// listing and an HTTP error when the request fails.
    async fn best_listing(&self, code: ItemCode) -> Result<Option<MarketQuote>>;

    /// Human-readable name of this market.
    fn market_name(&self) -> &'static str;
}
