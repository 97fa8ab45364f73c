use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A malformed market payload. The offending item is skipped.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The ticker fetch failed; the whole poll cycle is abandoned.
    #[error("batch fetch failed: {0}")]
    BatchFetch(String),

    /// A store or market read failed where a default can stand in.
    #[error("dependency unavailable: {0}")]
    DependencyUnavailable(String),

    #[error("alert delivery failed: {0}")]
    AlertDelivery(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_displays_field() {
        let err = ConfigError::InvalidValue {
            field: "workers",
            reason: "must be greater than 0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for workers: must be greater than 0"
        );
    }

    #[test]
    fn domain_error_is_transparent() {
        let err: Error = DomainError::MissingField { field: "price" }.into();
        assert_eq!(err.to_string(), "malformed listing: missing field price");
    }

    #[test]
    fn batch_fetch_error_message() {
        let err = Error::BatchFetch("status 503".into());
        assert_eq!(err.to_string(), "batch fetch failed: status 503");
    }
}
