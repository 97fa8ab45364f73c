//! SimCompanies REST API client.
//!
//! Two endpoints are used: the market ticker, listing every traded resource
//! with its current price, and the per-resource market listing, sorted
//! cheapest first.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, warn};

use super::dto::{ListingRow, TickerRow};
use super::settings::SimCompaniesConfig;
use crate::domain::{ItemCode, MarketQuote, TickerEntry};
use crate::error::{Error, Result};
use crate::port::outbound::market::MarketFetcher;

/// HTTP client for the SimCompanies market API.
pub struct SimCompaniesClient {
    http: HttpClient,
    api_url: String,
    realm: u8,
}

impl SimCompaniesClient {
    /// Create a client for the given API base URL and realm.
    #[must_use]
    pub fn new(api_url: impl Into<String>, realm: u8) -> Self {
        Self {
            http: HttpClient::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            realm,
        }
    }

    #[must_use]
    pub fn from_config(config: &SimCompaniesConfig) -> Self {
        Self {
            http: config.http.build_client(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            realm: config.realm,
        }
    }

    /// URL of the market ticker.
    #[must_use]
    pub fn ticker_url(&self) -> String {
        format!("{}/v3/market-ticker/{}/", self.api_url, self.realm)
    }

    /// URL of the listing for one resource.
    #[must_use]
    pub fn listing_url(&self, code: ItemCode) -> String {
        format!("{}/v3/market/{}/{}", self.api_url, self.realm, code)
    }

    async fn get_json<T>(&self, url: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.json::<T>().await?)
    }
}

/// Convert ticker rows, dropping malformed ones.
pub(crate) fn ticker_entries(rows: Vec<TickerRow>) -> Vec<TickerEntry> {
    rows.into_iter()
        .filter_map(|row| match TickerEntry::try_from(row) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "Skipping malformed ticker row");
                None
            }
        })
        .collect()
}

#[async_trait]
impl MarketFetcher for SimCompaniesClient {
    async fn ticker(&self) -> Result<Vec<TickerEntry>> {
        let url = self.ticker_url();
        debug!(url = %url, "Fetching market ticker");

        let rows: Vec<TickerRow> = self
            .get_json(&url)
            .await
            .map_err(|e| Error::BatchFetch(e.to_string()))?;
        let entries = ticker_entries(rows);
        debug!(count = entries.len(), "Fetched ticker");
        Ok(entries)
    }

    async fn best_listing(&self, code: ItemCode) -> Result<Option<MarketQuote>> {
        let rows: Vec<ListingRow> = self.get_json(&self.listing_url(code)).await?;
        match rows.into_iter().next() {
            Some(row) => Ok(Some(MarketQuote::try_from(row)?)),
            None => Ok(None),
        }
    }

    fn market_name(&self) -> &'static str {
        "SimCompanies"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_endpoint_urls() {
        let client = SimCompaniesClient::new("https://www.simcompanies.com/api/", 0);
        assert_eq!(
            client.ticker_url(),
            "https://www.simcompanies.com/api/v3/market-ticker/0/"
        );
        assert_eq!(
            client.listing_url(ItemCode::new(43)),
            "https://www.simcompanies.com/api/v3/market/0/43"
        );
    }

    #[test]
    fn realm_is_part_of_the_path() {
        let client = SimCompaniesClient::new("http://localhost:1", 1);
        assert_eq!(client.ticker_url(), "http://localhost:1/v3/market-ticker/1/");
    }

    #[test]
    fn malformed_ticker_rows_are_dropped() {
        let rows: Vec<TickerRow> =
            serde_json::from_str(r#"[{"kind": 1, "price": 0.3}, {"kind": 2}, {"price": 4}]"#)
                .unwrap();
        let entries = ticker_entries(rows);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].code, ItemCode::new(1));
    }

    #[tokio::test]
    async fn unreachable_ticker_is_a_batch_failure() {
        let client = SimCompaniesClient::new("http://127.0.0.1:9", 0);
        let err = client.ticker().await.unwrap_err();
        assert!(matches!(err, Error::BatchFetch(_)));
    }
}
