//! Market-agnostic domain logic: reference data, quotes and the
//! profitability evaluator.

pub mod analysis;
pub mod catalog;
pub mod error;
pub mod evaluator;
pub mod id;
pub mod money;
pub mod quote;
pub mod risk;

pub use analysis::{AnalysisRecord, TimeBucket};
pub use catalog::{Catalog, ItemInfo};
pub use evaluator::{Evaluation, PriceContext, ProfitabilityEvaluator};
pub use id::ItemCode;
pub use money::{Price, Profit};
pub use quote::{MarketQuote, TickerEntry};
pub use risk::RiskLevel;
