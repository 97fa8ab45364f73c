//! Wire types for the SimCompanies market API.
//!
//! Every field is optional on the wire so that a single malformed row
//! surfaces as a [`DomainError`] for that row instead of failing the whole
//! response.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::error::DomainError;
use crate::domain::{ItemCode, MarketQuote, TickerEntry};

/// One row of `GET /v3/market-ticker/{realm}/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TickerRow {
    #[serde(default)]
    pub kind: Option<u32>,
    #[serde(default)]
    pub price: Option<Decimal>,
}

impl TryFrom<TickerRow> for TickerEntry {
    type Error = DomainError;

    fn try_from(row: TickerRow) -> Result<Self, Self::Error> {
        let code = row.kind.ok_or(DomainError::MissingField { field: "kind" })?;
        let price = row.price.ok_or(DomainError::MissingField { field: "price" })?;
        Ok(Self {
            code: ItemCode::new(code),
            price,
        })
    }
}

/// Seller block of a listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SellerRow {
    #[serde(default)]
    pub company: Option<String>,
}

/// One row of `GET /v3/market/{realm}/{kind}`, cheapest first.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingRow {
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub quantity: Option<u64>,
    #[serde(default)]
    pub quality: Option<u32>,
    #[serde(default)]
    pub seller: Option<SellerRow>,
}

impl TryFrom<ListingRow> for MarketQuote {
    type Error = DomainError;

    fn try_from(row: ListingRow) -> Result<Self, Self::Error> {
        let price = row.price.ok_or(DomainError::MissingField { field: "price" })?;
        let quantity = row
            .quantity
            .ok_or(DomainError::MissingField { field: "quantity" })?;
        let seller = row
            .seller
            .and_then(|s| s.company)
            .ok_or(DomainError::MissingField { field: "seller" })?;
        MarketQuote::try_new(price, quantity, row.quality.unwrap_or(0), seller)
    }
}
