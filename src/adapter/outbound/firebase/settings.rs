//! Firebase store configuration.

use serde::Deserialize;

use crate::adapter::outbound::simcompanies::settings::HttpConfig;

/// Realtime Database connection settings.
///
/// The auth token is never read from the config file; it comes from the
/// `FIREBASE_AUTH_TOKEN` environment variable.
#[derive(Debug, Clone, Deserialize)]
pub struct FirebaseConfig {
    /// Database root, e.g. `https://<project>-default-rtdb.firebaseio.com/`.
    pub database_url: String,
    #[serde(default, flatten)]
    pub http: HttpConfig,
    #[serde(skip)]
    pub auth_token: Option<String>,
}
