//! Profitability evaluation for a single listing.
//!
//! Given the cheapest listing for an item, the item's rolling average price
//! and the current transport price, the evaluator works out what one unit
//! would fetch after the market fee and shipping, how much the whole lot
//! would earn, and how risky the resale looks.
//!
//! ```text
//! transport_cost   = transport_requirement(item) * transport_unit_price
//! receiving_amount = avg_price * 0.97 - transport_cost
//! profit           = (receiving_amount - price) * quantity
//! profit_percent   = (receiving_amount - price) / avg_price * 100
//! ```
//!
//! A zero average price leaves `profit_percent` undefined. Such evaluations
//! carry no risk level, produce no record and never alert. Figures whose
//! products leave `Decimal`'s range are rejected as
//! [`DomainError::Overflow`].
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use simcowatch::domain::evaluator::{PriceContext, ProfitabilityEvaluator};
//! use simcowatch::domain::id::ItemCode;
//! use simcowatch::domain::quote::MarketQuote;
//! use simcowatch::domain::risk::RiskLevel;
//!
//! let evaluator = ProfitabilityEvaluator::default();
//! let quote = MarketQuote::try_new(dec!(70), 50, 0, "Acme").unwrap();
//! let context = PriceContext::new(Some(dec!(100)), Some(dec!(10)));
//!
//! let evaluation = evaluator.evaluate(ItemCode::new(43), &quote, &context).unwrap();
//! assert_eq!(evaluation.receiving_amount, dec!(87));
//! assert_eq!(evaluation.profit, dec!(850));
//! assert_eq!(evaluation.risk_level, Some(RiskLevel::UltraLow));
//! assert!(!evaluation.should_alert());
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::analysis::AnalysisRecord;
use super::catalog::{self, Catalog};
use super::error::DomainError;
use super::id::ItemCode;
use super::money::{Price, Profit};
use super::quote::MarketQuote;
use super::risk::RiskLevel;

/// Share of the average price left after the 3% marketplace fee.
pub const MARKET_FEE_FACTOR: Decimal = dec!(0.97);

/// Alerts fire only when total profit exceeds this amount.
pub const ALERT_PROFIT_THRESHOLD: Decimal = dec!(1000);

const HUNDRED: Decimal = dec!(100);

/// Contextual prices read from the history store.
///
/// Either may be missing when the store had nothing or could not be
/// reached; missing values count as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceContext {
    pub historical_avg_price: Option<Price>,
    pub transport_unit_price: Option<Price>,
}

impl PriceContext {
    #[must_use]
    pub const fn new(
        historical_avg_price: Option<Price>,
        transport_unit_price: Option<Price>,
    ) -> Self {
        Self {
            historical_avg_price,
            transport_unit_price,
        }
    }

    /// Average price with the zero default applied.
    #[must_use]
    pub fn avg_price(&self) -> Price {
        self.historical_avg_price.unwrap_or(Decimal::ZERO)
    }

    /// Transport price with the zero default applied.
    #[must_use]
    pub fn transport_price(&self) -> Price {
        self.transport_unit_price.unwrap_or(Decimal::ZERO)
    }
}

/// Outcome of evaluating one listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub code: ItemCode,
    pub cost_price: Price,
    pub avg_price: Price,
    pub quantity: u64,
    pub quality: u32,
    pub seller: String,
    pub transport_cost: Price,
    pub receiving_amount: Price,
    pub profit: Profit,
    /// `None` when the average price is zero.
    pub profit_percent: Option<Profit>,
    /// `None` exactly when `profit_percent` is.
    pub risk_level: Option<RiskLevel>,
}

impl Evaluation {
    /// The record to persist, present only for a strictly positive margin.
    #[must_use]
    pub fn record(&self) -> Option<AnalysisRecord> {
        let (profit_percent, risk_level) = self.profit_percent.zip(self.risk_level)?;
        if profit_percent <= Decimal::ZERO {
            return None;
        }
        Some(AnalysisRecord {
            cost_price: self.cost_price,
            avg_price: self.avg_price,
            receiving_amount: self.receiving_amount,
            quantity: self.quantity,
            profit: self.profit,
            risk_level,
            seller: self.seller.clone(),
            profit_percent,
        })
    }

    /// Whether this evaluation warrants an alert.
    ///
    /// Requires a persisted record, profit above
    /// [`ALERT_PROFIT_THRESHOLD`] and a code outside the excluded set.
    #[must_use]
    pub fn should_alert(&self) -> bool {
        self.profit_percent.is_some_and(|p| p > Decimal::ZERO)
            && self.profit > ALERT_PROFIT_THRESHOLD
            && !catalog::is_excluded_from_alerts(self.code)
    }
}

/// Stateless evaluator over an injected reference catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfitabilityEvaluator {
    catalog: Catalog,
}

impl ProfitabilityEvaluator {
    #[must_use]
    pub const fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Evaluate one listing against its contextual prices.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Overflow`] when a derived figure does not fit
    /// in a `Decimal`.
    pub fn evaluate(
        &self,
        code: ItemCode,
        quote: &MarketQuote,
        context: &PriceContext,
    ) -> Result<Evaluation, DomainError> {
        let avg_price = context.avg_price();
        let transport_cost = self
            .catalog
            .lookup(code)
            .transport_requirement
            .checked_mul(context.transport_price())
            .ok_or(overflow("transport_cost"))?;
        let receiving_amount = avg_price
            .checked_mul(MARKET_FEE_FACTOR)
            .and_then(|net| net.checked_sub(transport_cost))
            .ok_or(overflow("receiving_amount"))?;

        let margin = receiving_amount
            .checked_sub(quote.price())
            .ok_or(overflow("margin"))?;
        let profit = margin
            .checked_mul(Decimal::from(quote.quantity()))
            .ok_or(overflow("profit"))?;
        let profit_percent = if avg_price.is_zero() {
            None
        } else {
            let percent = margin
                .checked_div(avg_price)
                .and_then(|ratio| ratio.checked_mul(HUNDRED))
                .ok_or(overflow("profit_percent"))?;
            Some(percent)
        };

        Ok(Evaluation {
            code,
            cost_price: quote.price(),
            avg_price,
            quantity: quote.quantity(),
            quality: quote.quality(),
            seller: quote.seller().to_string(),
            transport_cost,
            receiving_amount,
            profit,
            profit_percent,
            risk_level: profit_percent.map(RiskLevel::classify),
        })
    }
}

const fn overflow(quantity: &'static str) -> DomainError {
    DomainError::Overflow { quantity }
}
