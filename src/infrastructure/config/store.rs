//! Price history backend selection.

use serde::Deserialize;

use crate::adapter::outbound::firebase::FirebaseConfig;

/// `[store]` table, tagged by `type`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StoreConfig {
    Firebase(FirebaseConfig),
    /// Process-local store; nothing survives a restart.
    #[default]
    Memory,
}

impl StoreConfig {
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Firebase(_) => "firebase",
            Self::Memory => "memory",
        }
    }
}
