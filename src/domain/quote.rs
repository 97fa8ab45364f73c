//! Market snapshots: ticker prices and the best listing for one item.

use rust_decimal::Decimal;

use super::error::DomainError;
use super::id::ItemCode;
use super::money::Price;

/// One ticker row: the current market price of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickerEntry {
    pub code: ItemCode,
    pub price: Price,
}

/// The cheapest listing for an item at one instant.
///
/// Built only through [`MarketQuote::try_new`], which rejects negative
/// prices and blank seller names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketQuote {
    price: Price,
    quantity: u64,
    quality: u32,
    seller: String,
}

impl MarketQuote {
    /// Validate and build a quote.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidValue`] when `price` is negative or
    /// `seller` is blank.
    pub fn try_new(
        price: Price,
        quantity: u64,
        quality: u32,
        seller: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if price < Decimal::ZERO {
            return Err(DomainError::InvalidValue {
                field: "price",
                reason: format!("must be non-negative, got {price}"),
            });
        }
        let seller = seller.into();
        if seller.trim().is_empty() {
            return Err(DomainError::InvalidValue {
                field: "seller",
                reason: "must not be blank".to_string(),
            });
        }
        Ok(Self {
            price,
            quantity,
            quality,
            seller,
        })
    }

    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }

    #[must_use]
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    #[must_use]
    pub fn quality(&self) -> u32 {
        self.quality
    }

    #[must_use]
    pub fn seller(&self) -> &str {
        &self.seller
    }
}
