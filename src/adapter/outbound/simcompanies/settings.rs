//! SimCompanies API configuration.

use serde::Deserialize;

/// Market API settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SimCompaniesConfig {
    /// API base URL, without a trailing slash.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Game realm (0 = Magnates, 1 = Entrepreneurs).
    #[serde(default)]
    pub realm: u8,
    #[serde(default, flatten)]
    pub http: HttpConfig,
}

fn default_api_url() -> String {
    "https://www.simcompanies.com/api".to_string()
}

impl Default for SimCompaniesConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            realm: 0,
            http: HttpConfig::default(),
        }
    }
}

/// HTTP client configuration shared by the outbound adapters.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_http_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

const fn default_http_timeout_ms() -> u64 {
    10_000
}

const fn default_http_connect_timeout_ms() -> u64 {
    5_000
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_http_timeout_ms(),
            connect_timeout_ms: default_http_connect_timeout_ms(),
        }
    }
}

impl HttpConfig {
    /// Build a reqwest client honouring these timeouts.
    ///
    /// Falls back to a default client if the builder fails.
    #[must_use]
    pub fn build_client(&self) -> reqwest::Client {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(self.timeout_ms))
            .connect_timeout(std::time::Duration::from_millis(self.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "Failed to build HTTP client, using defaults");
                reqwest::Client::new()
            })
    }
}
