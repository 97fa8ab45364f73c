//! Persistence port for price history and analysis records.

use async_trait::async_trait;

use crate::domain::{AnalysisRecord, ItemCode, Price, TimeBucket};
use crate::error::Result;

/// Timestamped per-item key-value store.
///
/// Every write is a single-key upsert. No operation spans items, so
/// concurrent callers working on different codes never conflict.
#[async_trait]
pub trait PriceHistoryStore: Send + Sync {
    /// Record a ticker price and update the item's last observed price.
    async fn record_observation(
        &self,
        code: ItemCode,
        price: Price,
        bucket: &TimeBucket,
    ) -> Result<()>;

    /// Last observed ticker price for an item, if any.
    async fn last_price(&self, code: ItemCode) -> Result<Option<Price>>;

    /// Externally maintained rolling average price for an item, if any.
    async fn average_price(&self, code: ItemCode) -> Result<Option<Price>>;

    /// Persist an analysis record under its time bucket.
    async fn record_analysis(
        &self,
        code: ItemCode,
        bucket: &TimeBucket,
        record: &AnalysisRecord,
    ) -> Result<()>;

    /// Human-readable name of this backend.
    fn backend_name(&self) -> &'static str;
}
