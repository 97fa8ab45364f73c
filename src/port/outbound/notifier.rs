//! Alert dispatch port.
//!
//! Alerts are sent for high-profit opportunities. Delivery is best effort:
//! failures are logged and never retried, and they do not undo anything
//! already persisted.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::{catalog, AnalysisRecord, Evaluation, ItemCode};
use crate::error::Result;

/// Everything a channel needs to render one opportunity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub code: ItemCode,
    pub item_name: String,
    /// Canonical market page for the item.
    pub link: String,
    pub quality: u32,
    pub record: AnalysisRecord,
}

impl Alert {
    /// Build an alert from an evaluation and the record it produced.
    #[must_use]
    pub fn new(evaluation: &Evaluation, record: AnalysisRecord) -> Self {
        Self {
            code: evaluation.code,
            item_name: catalog::name(evaluation.code).to_string(),
            link: catalog::market_url(evaluation.code),
            quality: evaluation.quality,
            record,
        }
    }
}

/// Result of handing an alert to a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered,
    /// The channel answered with a non-success status.
    Rejected { status: u16, body: String },
}

impl DeliveryOutcome {
    #[must_use]
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered)
    }
}

/// An outbound alert channel.
#[async_trait]
pub trait AlertDispatcher: Send + Sync {
    /// Deliver one alert.
    ///
    /// # Errors
    ///
    /// Returns an error when the channel cannot be reached at all.
    async fn dispatch(&self, alert: &Alert) -> Result<DeliveryOutcome>;

    /// Channel name for logs.
    fn name(&self) -> &'static str;
}

/// Registry of dispatchers (composite pattern).
///
/// Broadcasts an alert to every registered channel and logs the outcome.
#[derive(Default)]
pub struct DispatcherRegistry {
    dispatchers: Vec<Box<dyn AlertDispatcher>>,
}

impl DispatcherRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a dispatcher.
    pub fn register(&mut self, dispatcher: Box<dyn AlertDispatcher>) {
        self.dispatchers.push(dispatcher);
    }

    /// Send an alert through every channel. Returns how many delivered.
    pub async fn dispatch_all(&self, alert: &Alert) -> usize {
        let mut delivered = 0;
        for dispatcher in &self.dispatchers {
            match dispatcher.dispatch(alert).await {
                Ok(DeliveryOutcome::Delivered) => {
                    delivered += 1;
                    info!(
                        channel = dispatcher.name(),
                        item = %alert.code,
                        name = %alert.item_name,
                        "Alert delivered"
                    );
                }
                Ok(DeliveryOutcome::Rejected { status, body }) => {
                    warn!(
                        channel = dispatcher.name(),
                        item = %alert.code,
                        status,
                        body = %body,
                        "Alert rejected"
                    );
                }
                Err(e) => {
                    warn!(
                        channel = dispatcher.name(),
                        item = %alert.code,
                        error = %e,
                        "Alert delivery failed"
                    );
                }
            }
        }
        delivered
    }

    /// Names of the registered channels.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.dispatchers.iter().map(|d| d.name()).collect()
    }

    /// Number of registered dispatchers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dispatchers.len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dispatchers.is_empty()
    }
}

/// A dispatcher that only logs, used when no channel is configured.
pub struct LogDispatcher;

#[async_trait]
impl AlertDispatcher for LogDispatcher {
    async fn dispatch(&self, alert: &Alert) -> Result<DeliveryOutcome> {
        info!(
            item = %alert.code,
            name = %alert.item_name,
            quality = alert.quality,
            risk = %alert.record.risk_level,
            cost_price = %alert.record.cost_price,
            avg_price = %alert.record.avg_price,
            quantity = alert.record.quantity,
            profit = %alert.record.profit,
            profit_percent = %alert.record.profit_percent.round_dp(2),
            seller = %alert.record.seller,
            "Opportunity"
        );
        Ok(DeliveryOutcome::Delivered)
    }

    fn name(&self) -> &'static str {
        "log"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use rust_decimal_macros::dec;

    use super::*;
    use crate::domain::RiskLevel;
    use crate::error::Error;

    fn alert() -> Alert {
        Alert {
            code: ItemCode::new(43),
            item_name: "Steel".into(),
            link: catalog::market_url(ItemCode::new(43)),
            quality: 2,
            record: AnalysisRecord {
                cost_price: dec!(60),
                avg_price: dec!(100),
                receiving_amount: dec!(87),
                quantity: 200,
                profit: dec!(5400),
                risk_level: RiskLevel::UltraLow,
                seller: "Acme".into(),
                profit_percent: dec!(27),
            },
        }
    }

    struct Fixed(Result<DeliveryOutcome>, Arc<AtomicUsize>);

    #[async_trait]
    impl AlertDispatcher for Fixed {
        async fn dispatch(&self, _alert: &Alert) -> Result<DeliveryOutcome> {
            self.1.fetch_add(1, Ordering::SeqCst);
            match &self.0 {
                Ok(outcome) => Ok(outcome.clone()),
                Err(e) => Err(Error::AlertDelivery(e.to_string())),
            }
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    #[tokio::test]
    async fn registry_counts_only_deliveries() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut registry = DispatcherRegistry::new();
        registry.register(Box::new(Fixed(Ok(DeliveryOutcome::Delivered), calls.clone())));
        registry.register(Box::new(Fixed(
            Ok(DeliveryOutcome::Rejected {
                status: 400,
                body: "bad".into(),
            }),
            calls.clone(),
        )));
        registry.register(Box::new(Fixed(
            Err(Error::AlertDelivery("down".into())),
            calls.clone(),
        )));

        assert_eq!(registry.dispatch_all(&alert()).await, 1);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn log_dispatcher_always_delivers() {
        let outcome = LogDispatcher.dispatch(&alert()).await.unwrap();
        assert!(outcome.is_delivered());
    }

    #[test]
    fn empty_registry() {
        let registry = DispatcherRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }
}
