//! Monetary types for price and profit representation.

use rust_decimal::Decimal;

/// Price represented as a Decimal for precision.
pub type Price = Decimal;

/// Profit represented as a Decimal for precision.
pub type Profit = Decimal;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn fee_adjusted_price_is_exact() {
        let avg: Price = dec!(100);
        let net: Profit = avg * dec!(0.97) - dec!(10);

        assert_eq!(net, dec!(87));
    }
}
