//! Simcowatch - SimCompanies market scanning and resale alerts.
//!
//! Each poll cycle fetches the market ticker, then for every traded item
//! fetches the cheapest listing and scores it against the item's rolling
//! average price, net of the 3% market fee and transport. Profitable
//! listings are stored; large ones are broadcast to the alert channels.
//!
//! # Architecture
//!
//! Hexagonal layout:
//!
//! - [`domain`] - Pure logic: item catalog, quotes, the profitability
//!   evaluator and risk classification
//! - [`port`] - Traits for the market, the price history store and alert
//!   channels
//! - [`adapter`] - SimCompanies REST client, Firebase and in-memory stores,
//!   Discord and Telegram dispatchers, and the CLI
//! - [`application`] - The per-item pipeline and the poll loop
//! - [`infrastructure`] - Configuration, logging and wiring
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `telegram` (default) - Telegram alert channel via `teloxide`
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use simcowatch::domain::{ItemCode, MarketQuote, PriceContext, ProfitabilityEvaluator};
//!
//! let quote = MarketQuote::try_new(dec!(60), 200, 0, "Acme").unwrap();
//! let context = PriceContext::new(Some(dec!(100)), Some(dec!(10)));
//! let evaluation = ProfitabilityEvaluator::default()
//!     .evaluate(ItemCode::new(43), &quote, &context)
//!     .unwrap();
//! assert!(evaluation.should_alert());
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
