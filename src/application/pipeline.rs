//! Per-item processing: observe, price, evaluate, persist, alert.
//!
//! Each call touches only keys belonging to its own item, so any number of
//! calls for distinct items may run concurrently. Nothing in here fails the
//! batch: dependency failures fall back to zero defaults and malformed
//! listings skip the item.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::catalog::{self, TRANSPORT};
use crate::domain::{
    ItemCode, Price, PriceContext, ProfitabilityEvaluator, RiskLevel, TickerEntry, TimeBucket,
};
use crate::error::Error;
use crate::port::outbound::market::MarketFetcher;
use crate::port::outbound::notifier::{Alert, DispatcherRegistry};
use crate::port::outbound::store::PriceHistoryStore;

/// What happened to one ticker entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    /// The market had no listing for the item.
    NoListing,
    /// The listing was malformed, overflowed evaluation or could not be fetched.
    Skipped { reason: String },
    /// The average price was zero, so no percentage could be computed.
    Undefined,
    Evaluated {
        risk_level: RiskLevel,
        recorded: bool,
        alerted: bool,
    },
}

/// Runs the profitability pipeline for single items.
pub struct ItemPipeline {
    market: Arc<dyn MarketFetcher>,
    store: Arc<dyn PriceHistoryStore>,
    dispatchers: Arc<DispatcherRegistry>,
    evaluator: ProfitabilityEvaluator,
}

impl ItemPipeline {
    #[must_use]
    pub fn new(
        market: Arc<dyn MarketFetcher>,
        store: Arc<dyn PriceHistoryStore>,
        dispatchers: Arc<DispatcherRegistry>,
        evaluator: ProfitabilityEvaluator,
    ) -> Self {
        Self {
            market,
            store,
            dispatchers,
            evaluator,
        }
    }

    /// Process one ticker entry under the given time bucket.
    pub async fn process(&self, entry: TickerEntry, bucket: &TimeBucket) -> ItemOutcome {
        let code = entry.code;

        if let Err(e) = self.store.record_observation(code, entry.price, bucket).await {
            warn!(item = %code, error = %e, "Failed to record observation");
        } else {
            debug!(item = %code, price = %entry.price, time = %bucket.second, "Observation stored");
        }

        let context = PriceContext::new(
            read_or_default("average price", code, self.store.average_price(code).await),
            read_or_default(
                "transport price",
                TRANSPORT,
                self.store.last_price(TRANSPORT).await,
            ),
        );

        let quote = match self.market.best_listing(code).await {
            Ok(Some(quote)) => quote,
            Ok(None) => {
                debug!(item = %code, "No listing");
                return ItemOutcome::NoListing;
            }
            Err(Error::Domain(e)) => {
                warn!(item = %code, error = %e, "Skipping malformed listing");
                return ItemOutcome::Skipped {
                    reason: e.to_string(),
                };
            }
            Err(e) => {
                warn!(item = %code, error = %e, "Failed to fetch listing");
                return ItemOutcome::Skipped {
                    reason: e.to_string(),
                };
            }
        };

        let evaluation = match self.evaluator.evaluate(code, &quote, &context) {
            Ok(evaluation) => evaluation,
            Err(e) => {
                warn!(item = %code, error = %e, "Skipping listing that cannot be evaluated");
                return ItemOutcome::Skipped {
                    reason: e.to_string(),
                };
            }
        };
        let Some(risk_level) = evaluation.risk_level else {
            debug!(item = %code, "Average price is zero, profit percentage undefined");
            return ItemOutcome::Undefined;
        };

        let Some(record) = evaluation.record() else {
            debug!(item = %code, risk = %risk_level, "No positive margin");
            return ItemOutcome::Evaluated {
                risk_level,
                recorded: false,
                alerted: false,
            };
        };

        info!(
            item = %code,
            name = catalog::name(code),
            quality = evaluation.quality,
            seller = %record.seller,
            cost_price = %record.cost_price,
            avg_price = %record.avg_price,
            receiving_amount = %record.receiving_amount,
            quantity = record.quantity,
            profit = %record.profit,
            profit_percent = %record.profit_percent,
            risk = %risk_level,
            "Profitable listing"
        );

        let recorded = match self.store.record_analysis(code, bucket, &record).await {
            Ok(()) => true,
            Err(e) => {
                warn!(item = %code, error = %e, "Failed to store analysis");
                false
            }
        };

        let alerted = if evaluation.should_alert() {
            let alert = Alert::new(&evaluation, record);
            self.dispatchers.dispatch_all(&alert).await > 0
        } else {
            false
        };

        ItemOutcome::Evaluated {
            risk_level,
            recorded,
            alerted,
        }
    }
}

fn read_or_default(
    what: &'static str,
    code: ItemCode,
    read: crate::error::Result<Option<Price>>,
) -> Option<Price> {
    match read {
        Ok(price) => price,
        Err(e) => {
            let e = Error::DependencyUnavailable(e.to_string());
            warn!(item = %code, what, error = %e, "Using zero default");
            None
        }
    }
}
