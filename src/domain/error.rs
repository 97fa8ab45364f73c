//! Data integrity errors for market payloads.
//!
//! Raised when a listing or ticker entry coming off the wire is missing a
//! field the evaluator needs, or carries a value outside its domain. The
//! poller logs these and skips the item; the rest of the batch continues.
//!
//! # Examples
//!
//! ```
//! use rust_decimal_macros::dec;
//! use simcowatch::domain::error::DomainError;
//! use simcowatch::domain::quote::MarketQuote;
//!
//! // A negative price fails validation
//! let result = MarketQuote::try_new(dec!(-1), 10, 0, "Acme");
//!
//! assert!(matches!(result, Err(DomainError::InvalidValue { field: "price", .. })));
//! ```

use thiserror::Error;

/// Errors raised when a market payload fails validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field was absent from the payload.
    #[error("malformed listing: missing field {field}")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// A field was present but held an unusable value.
    #[error("malformed listing: invalid {field}: {reason}")]
    InvalidValue {
        /// Name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Arithmetic on the listing's figures left the representable range.
    #[error("listing figures overflow while computing {quantity}")]
    Overflow {
        /// The derived quantity being computed.
        quantity: &'static str,
    },
}
