//! In-memory price history store.
//!
//! Used for dry runs and tests. Average prices must be seeded with
//! [`MemoryStore::set_average`] since nothing in this process computes them.
//! Each item keeps at most `history_limit` observations and analyses; older
//! entries are dropped first.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{AnalysisRecord, ItemCode, Price, TimeBucket};
use crate::error::Result;
use crate::port::outbound::store::PriceHistoryStore;

/// A stored observation: `(day, second, price)`.
pub type Observation = (String, String, Price);

/// Per-item history kept by default: one day of one-minute cycles.
pub const DEFAULT_HISTORY_LIMIT: usize = 1440;

/// In-memory store keyed by item code.
#[derive(Debug)]
pub struct MemoryStore {
    history_limit: usize,
    observations: RwLock<HashMap<ItemCode, VecDeque<Observation>>>,
    last_prices: RwLock<HashMap<ItemCode, Price>>,
    averages: RwLock<HashMap<ItemCode, Price>>,
    analyses: RwLock<HashMap<ItemCode, VecDeque<(TimeBucket, AnalysisRecord)>>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }
}

/// Append to a bounded history, evicting the oldest entry when full.
fn push_bounded<T>(history: &mut VecDeque<T>, value: T, limit: usize) {
    if history.len() >= limit {
        history.pop_front();
    }
    history.push_back(value);
}

impl MemoryStore {
    /// Create a new empty memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store keeping at most `limit` entries per item (minimum 1).
    #[must_use]
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            history_limit: limit.max(1),
            observations: RwLock::default(),
            last_prices: RwLock::default(),
            averages: RwLock::default(),
            analyses: RwLock::default(),
        }
    }

    /// Seed the rolling average for an item.
    pub fn set_average(&self, code: ItemCode, price: Price) {
        self.averages.write().insert(code, price);
    }

    /// Observations recorded for an item, oldest first.
    #[must_use]
    pub fn observations(&self, code: ItemCode) -> Vec<Observation> {
        self.observations
            .read()
            .get(&code)
            .map(|v| v.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Analysis records stored for an item, oldest first.
    #[must_use]
    pub fn analyses(&self, code: ItemCode) -> Vec<AnalysisRecord> {
        self.analyses
            .read()
            .get(&code)
            .map(|v| v.iter().map(|(_, r)| r.clone()).collect())
            .unwrap_or_default()
    }

    /// Total number of analysis records across all items.
    #[must_use]
    pub fn analysis_count(&self) -> usize {
        self.analyses.read().values().map(VecDeque::len).sum()
    }
}

#[async_trait]
impl PriceHistoryStore for MemoryStore {
    async fn record_observation(
        &self,
        code: ItemCode,
        price: Price,
        bucket: &TimeBucket,
    ) -> Result<()> {
        push_bounded(
            self.observations.write().entry(code).or_default(),
            (bucket.day.clone(), bucket.second.clone(), price),
            self.history_limit,
        );
        self.last_prices.write().insert(code, price);
        Ok(())
    }

    async fn last_price(&self, code: ItemCode) -> Result<Option<Price>> {
        Ok(self.last_prices.read().get(&code).copied())
    }

    async fn average_price(&self, code: ItemCode) -> Result<Option<Price>> {
        Ok(self.averages.read().get(&code).copied())
    }

    async fn record_analysis(
        &self,
        code: ItemCode,
        bucket: &TimeBucket,
        record: &AnalysisRecord,
    ) -> Result<()> {
        push_bounded(
            self.analyses.write().entry(code).or_default(),
            (bucket.clone(), record.clone()),
            self.history_limit,
        );
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    use super::*;

    #[tokio::test]
    async fn observation_updates_last_price() {
        let store = MemoryStore::new();
        let code = ItemCode::new(13);
        let bucket = TimeBucket::at(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());

        assert_eq!(store.last_price(code).await.unwrap(), None);
        store.record_observation(code, dec!(0.3), &bucket).await.unwrap();
        store.record_observation(code, dec!(0.4), &bucket).await.unwrap();

        assert_eq!(store.last_price(code).await.unwrap(), Some(dec!(0.4)));
        assert_eq!(store.observations(code).len(), 2);
        assert_eq!(store.observations(code)[0].0, "1_1_2025");
    }

    #[tokio::test]
    async fn averages_are_seeded() {
        let store = MemoryStore::new();
        store.set_average(ItemCode::new(43), dec!(100));
        assert_eq!(
            store.average_price(ItemCode::new(43)).await.unwrap(),
            Some(dec!(100))
        );
        assert_eq!(store.average_price(ItemCode::new(44)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn history_is_bounded_per_item() {
        let store = MemoryStore::with_history_limit(3);
        let code = ItemCode::new(43);
        let bucket = TimeBucket::at(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());

        for price in 1..=5 {
            store
                .record_observation(code, rust_decimal::Decimal::from(price), &bucket)
                .await
                .unwrap();
        }

        let prices: Vec<_> = store.observations(code).into_iter().map(|o| o.2).collect();
        assert_eq!(prices, vec![dec!(3), dec!(4), dec!(5)]);
        assert_eq!(store.last_price(code).await.unwrap(), Some(dec!(5)));
        assert_eq!(store.observations(ItemCode::new(44)).len(), 0);
    }
}
