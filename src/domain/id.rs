//! Domain identifier types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Item code - the small integer SimCompanies calls a resource "kind".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemCode(u32);

impl ItemCode {
    /// Create a new `ItemCode`.
    #[must_use]
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    /// Get the raw numeric code.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ItemCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ItemCode {
    fn from(code: u32) -> Self {
        Self::new(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_bare_number() {
        assert_eq!(ItemCode::new(43).to_string(), "43");
    }

    #[test]
    fn deserializes_from_plain_integer() {
        let code: ItemCode = serde_json::from_str("13").unwrap();
        assert_eq!(code, ItemCode::new(13));
    }
}
