//! Analysis records and the time buckets they are filed under.

use chrono::{DateTime, Datelike, FixedOffset, Offset, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

use super::money::{Price, Profit};
use super::risk::RiskLevel;

/// India Standard Time, UTC+05:30 with no daylight saving.
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// The profitability snapshot persisted for one item at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    #[serde(with = "rust_decimal::serde::float")]
    pub cost_price: Price,
    #[serde(with = "rust_decimal::serde::float")]
    pub avg_price: Price,
    #[serde(rename = "recvd_amount", with = "rust_decimal::serde::float")]
    pub receiving_amount: Price,
    pub quantity: u64,
    #[serde(with = "rust_decimal::serde::float")]
    pub profit: Profit,
    pub risk_level: RiskLevel,
    pub seller: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub profit_percent: Profit,
}

/// Store keys for one observation instant, in IST.
///
/// `day` is `"{d}_{m}_{yyyy}"` and `second` is `"{H}_{M}_{S}"`, neither
/// zero-padded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeBucket {
    pub day: String,
    pub second: String,
    /// `"%Y-%m-%d %H:%M:%S IST"`, written next to the last observed price.
    pub stamp: String,
}

impl TimeBucket {
    /// Bucket a UTC instant into IST day and second keys.
    #[must_use]
    pub fn at(instant: DateTime<Utc>) -> Self {
        let local = ist().from_utc_datetime(&instant.naive_utc());
        Self {
            day: format!("{}_{}_{}", local.day(), local.month(), local.year()),
            second: format!("{}_{}_{}", local.hour(), local.minute(), local.second()),
            stamp: local.format("%Y-%m-%d %H:%M:%S IST").to_string(),
        }
    }

    /// Bucket the current instant.
    #[must_use]
    pub fn now() -> Self {
        Self::at(Utc::now())
    }
}

fn ist() -> FixedOffset {
    FixedOffset::east_opt(IST_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}
