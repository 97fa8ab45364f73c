//! Number formatting shared by the alert channels.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Format a value rounded to `dp` places with comma thousands separators.
///
/// `with_thousands(dec!(12345.678), 2)` gives `"12,345.68"`.
#[must_use]
pub fn with_thousands(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp(dp);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let abs = rounded.abs();
    let whole = group_digits(&abs.trunc().to_string());

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&whole);
    if dp > 0 {
        let scale = Decimal::from(10u64.pow(dp));
        let frac = (abs.fract() * scale).trunc().to_u64().unwrap_or(0);
        out.push_str(&format!(".{frac:0width$}", width = dp as usize));
    }
    out
}

/// Whole part of a value with separators, truncated toward zero.
#[must_use]
pub fn whole_with_thousands(value: Decimal) -> String {
    with_thousands(value.trunc(), 0)
}

/// Percentage rounded to two places without trailing zeros.
#[must_use]
pub fn percent(value: Decimal) -> String {
    format!("{}%", value.round_dp(2).normalize())
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
