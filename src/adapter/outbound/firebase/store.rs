//! Realtime Database store over the REST API.
//!
//! Layout, with time keys bucketed in IST:
//!
//! ```text
//! Data/{kind}/{day}           {second: price}
//! LastPrices/{kind}           {price, last_updated}
//! AveragePrice/{kind}         price   (maintained elsewhere)
//! Analysis/{kind}/{day}       {second: record}
//! ```
//!
//! Writes use `PATCH`, so each one merges a single child key.

use std::str::FromStr;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use tracing::debug;
use url::Url;

use super::settings::FirebaseConfig;
use crate::domain::{AnalysisRecord, ItemCode, Price, TimeBucket};
use crate::error::{Error, Result};
use crate::port::outbound::store::PriceHistoryStore;

/// Firebase-backed price history store.
pub struct FirebaseStore {
    http: HttpClient,
    root: Url,
    auth_token: Option<String>,
}

impl FirebaseStore {
    /// Create a store rooted at `database_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn from_config(config: &FirebaseConfig) -> Result<Self> {
        let mut raw = config.database_url.clone();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        Ok(Self {
            http: config.http.build_client(),
            root: Url::parse(&raw)?,
            auth_token: config.auth_token.clone(),
        })
    }

    /// REST URL for a database path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not form a valid URL.
    pub fn url(&self, path: &str) -> Result<Url> {
        let mut url = self.root.join(&format!("{path}.json"))?;
        if let Some(token) = &self.auth_token {
            url.query_pairs_mut().append_pair("auth", token);
        }
        Ok(url)
    }

    async fn get(&self, path: &str) -> Result<Value> {
        let url = self.url(path)?;
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.json::<Value>().await?)
    }

    async fn patch(&self, path: &str, body: &Value) -> Result<()> {
        let url = self.url(path)?;
        self.http
            .patch(url)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        debug!(path, "Store updated");
        Ok(())
    }
}

/// Decode a stored price. `null` means absent.
pub(crate) fn price_from_value(value: &Value) -> Result<Option<Price>> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => Decimal::from_str(&n.to_string())
            .or_else(|_| Decimal::from_scientific(&n.to_string()))
            .map(Some)
            .map_err(|e| Error::Store(format!("unreadable price {n}: {e}"))),
        other => Err(Error::Store(format!("expected a number, got {other}"))),
    }
}

/// Encode a price as a JSON number.
pub(crate) fn price_to_value(price: Price) -> Value {
    price.to_f64().map_or(Value::Null, |f| json!(f))
}

#[async_trait]
impl PriceHistoryStore for FirebaseStore {
    async fn record_observation(
        &self,
        code: ItemCode,
        price: Price,
        bucket: &TimeBucket,
    ) -> Result<()> {
        let value = price_to_value(price);
        let mut series = serde_json::Map::new();
        series.insert(bucket.second.clone(), value.clone());
        self.patch(&format!("Data/{code}/{}", bucket.day), &Value::Object(series))
            .await?;
        self.patch(
            &format!("LastPrices/{code}"),
            &json!({ "price": value, "last_updated": bucket.stamp }),
        )
        .await
    }

    async fn last_price(&self, code: ItemCode) -> Result<Option<Price>> {
        price_from_value(&self.get(&format!("LastPrices/{code}/price")).await?)
    }

    async fn average_price(&self, code: ItemCode) -> Result<Option<Price>> {
        price_from_value(&self.get(&format!("AveragePrice/{code}")).await?)
    }

    async fn record_analysis(
        &self,
        code: ItemCode,
        bucket: &TimeBucket,
        record: &AnalysisRecord,
    ) -> Result<()> {
        let mut entry = serde_json::Map::new();
        entry.insert(bucket.second.clone(), serde_json::to_value(record)?);
        self.patch(&format!("Analysis/{code}/{}", bucket.day), &Value::Object(entry))
            .await
    }

    fn backend_name(&self) -> &'static str {
        "firebase"
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::adapter::outbound::simcompanies::settings::HttpConfig;

    fn store(token: Option<&str>) -> FirebaseStore {
        FirebaseStore::from_config(&FirebaseConfig {
            database_url: "https://simco-default-rtdb.firebaseio.com".into(),
            http: HttpConfig::default(),
            auth_token: token.map(str::to_string),
        })
        .unwrap()
    }

    #[test]
    fn builds_rest_urls() {
        let url = store(None).url("AveragePrice/43").unwrap();
        assert_eq!(
            url.as_str(),
            "https://simco-default-rtdb.firebaseio.com/AveragePrice/43.json"
        );
    }

    #[test]
    fn appends_auth_token() {
        let url = store(Some("s3cret")).url("LastPrices/13/price").unwrap();
        assert_eq!(url.query(), Some("auth=s3cret"));
    }

    #[test]
    fn decodes_stored_prices() {
        assert_eq!(price_from_value(&Value::Null).unwrap(), None);
        assert_eq!(price_from_value(&json!(12.5)).unwrap(), Some(dec!(12.5)));
        assert_eq!(price_from_value(&json!(300)).unwrap(), Some(dec!(300)));
        assert!(price_from_value(&json!("12")).is_err());
    }

    #[test]
    fn encodes_prices_as_numbers() {
        assert_eq!(price_to_value(dec!(0.25)), json!(0.25));
    }
}
