use std::sync::Arc;

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use simcowatch::adapter::outbound::memory::MemoryStore;
use simcowatch::application::ItemPipeline;
use simcowatch::domain::catalog::TRANSPORT;
use simcowatch::domain::{ItemCode, MarketQuote, ProfitabilityEvaluator, TickerEntry, TimeBucket};
use simcowatch::port::{AlertDispatcher, DispatcherRegistry, MarketFetcher, PriceHistoryStore};

pub fn quote(price: Decimal, quantity: u64) -> MarketQuote {
    MarketQuote::try_new(price, quantity, 1, "Acme").expect("valid quote")
}

pub fn entry(code: u32, price: Decimal) -> TickerEntry {
    TickerEntry {
        code: ItemCode::new(code),
        price,
    }
}

/// Noon UTC on 1 June 2025 (17:30 IST).
pub fn bucket() -> TimeBucket {
    TimeBucket::at(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap())
}

/// A memory store with averages for `codes` and a transport price.
pub async fn seeded_store(
    averages: &[(u32, Decimal)],
    transport_price: Option<Decimal>,
) -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    for (code, avg) in averages {
        store.set_average(ItemCode::new(*code), *avg);
    }
    if let Some(price) = transport_price {
        store
            .record_observation(TRANSPORT, price, &bucket())
            .await
            .expect("seed transport");
    }
    store
}

pub fn registry(dispatchers: Vec<Box<dyn AlertDispatcher>>) -> Arc<DispatcherRegistry> {
    let mut registry = DispatcherRegistry::new();
    for dispatcher in dispatchers {
        registry.register(dispatcher);
    }
    Arc::new(registry)
}

pub fn pipeline(
    market: Arc<dyn MarketFetcher>,
    store: Arc<dyn PriceHistoryStore>,
    dispatchers: Arc<DispatcherRegistry>,
) -> Arc<ItemPipeline> {
    Arc::new(ItemPipeline::new(
        market,
        store,
        dispatchers,
        ProfitabilityEvaluator::default(),
    ))
}
