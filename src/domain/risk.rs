//! Risk classification from profit percentage.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

const ULTRA_LOW_ABOVE: Decimal = dec!(8);
const LOW_FROM: Decimal = dec!(5);
const MID_FROM: Decimal = dec!(3);

/// Discrete confidence bucket for a resale opportunity.
///
/// Variants are ordered from safest to riskiest, so `UltraLow < Loss`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    UltraLow,
    Low,
    Mid,
    High,
    Loss,
}

impl RiskLevel {
    /// Classify a profit percentage.
    ///
    /// Breakpoints are checked top-down: above 8 is `UltraLow`, then
    /// `[5, 8]` is `Low`, `[3, 5)` is `Mid`, `[0, 3)` is `High` and anything
    /// negative is `Loss`.
    #[must_use]
    pub fn classify(profit_percent: Decimal) -> Self {
        if profit_percent > ULTRA_LOW_ABOVE {
            Self::UltraLow
        } else if profit_percent >= LOW_FROM {
            Self::Low
        } else if profit_percent >= MID_FROM {
            Self::Mid
        } else if profit_percent >= Decimal::ZERO {
            Self::High
        } else {
            Self::Loss
        }
    }

    /// Stable identifier used in persisted records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UltraLow => "ULTRA_LOW",
            Self::Low => "LOW",
            Self::Mid => "MID",
            Self::High => "HIGH",
            Self::Loss => "LOSS",
        }
    }

    /// Human-readable label for notifications.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UltraLow => "🟢💎 ULTRA LOW RISK – Golden Opportunity! 🚀",
            Self::Low => "✅🟢 LOW RISK – Safe & Profitable! 🏆",
            Self::Mid => "⚠️🟡 MID RISK – Analyze before selling! 🤔",
            Self::High => "🚨🔴 HIGH RISK – Think Twice! ⚡",
            Self::Loss => "❌💔 LOSS – Avoid Selling! 😓",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
