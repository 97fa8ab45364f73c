//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapter::outbound::firebase::FirebaseStore;
use crate::adapter::outbound::memory::MemoryStore;
use crate::adapter::outbound::notifier::{DiscordConfig, DiscordNotifier};
#[cfg(feature = "telegram")]
use crate::adapter::outbound::notifier::{TelegramConfig, TelegramNotifier};
use crate::adapter::outbound::simcompanies::SimCompaniesClient;
use crate::application::{ItemPipeline, Poller};
use crate::domain::ProfitabilityEvaluator;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::config::store::StoreConfig;
use crate::port::outbound::market::MarketFetcher;
use crate::port::outbound::notifier::{DispatcherRegistry, LogDispatcher};
use crate::port::outbound::store::PriceHistoryStore;

/// Build the market fetcher from configuration.
#[must_use]
pub fn build_market(config: &Config) -> Arc<dyn MarketFetcher> {
    Arc::new(SimCompaniesClient::from_config(&config.market))
}

/// Build the price history store from configuration.
///
/// # Errors
///
/// Returns an error if the Firebase database URL is invalid.
pub fn build_store(config: &Config) -> Result<Arc<dyn PriceHistoryStore>> {
    let store: Arc<dyn PriceHistoryStore> = match &config.store {
        StoreConfig::Firebase(firebase) => {
            if firebase.auth_token.is_none() {
                warn!("FIREBASE_AUTH_TOKEN not set, relying on database rules");
            }
            Arc::new(FirebaseStore::from_config(firebase)?)
        }
        StoreConfig::Memory => {
            warn!("Using in-memory store; averages are empty so nothing will be evaluated");
            Arc::new(MemoryStore::new())
        }
    };
    info!(backend = store.backend_name(), "Price history store ready");
    Ok(store)
}

/// Build the dispatcher registry from configuration.
///
/// Falls back to a log-only dispatcher when no channel is available.
#[must_use]
pub fn build_dispatchers(config: &Config) -> DispatcherRegistry {
    let mut registry = DispatcherRegistry::new();

    if config.alerts.discord {
        match DiscordConfig::from_env(config.alerts.footer.clone()) {
            Some(discord) => {
                registry.register(Box::new(DiscordNotifier::new(
                    discord,
                    config.market.http.build_client(),
                )));
                info!("Discord alerts enabled");
            }
            None => warn!("Discord alerts enabled but DISCORD_WEBHOOK_URL not set"),
        }
    }

    #[cfg(feature = "telegram")]
    if config.alerts.telegram {
        match TelegramConfig::from_env() {
            Some(telegram) => {
                registry.register(Box::new(TelegramNotifier::new(telegram)));
                info!("Telegram alerts enabled");
            }
            None => warn!("Telegram enabled but TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID not set"),
        }
    }

    #[cfg(not(feature = "telegram"))]
    if config.alerts.telegram {
        warn!("Telegram alerts requested but the telegram feature is disabled");
    }

    if registry.is_empty() {
        registry.register(Box::new(LogDispatcher));
    }
    registry
}

/// Wire a poller from configuration.
///
/// # Errors
///
/// Returns an error if the store cannot be constructed.
pub fn build_poller(config: &Config) -> Result<Poller> {
    let market = build_market(config);
    let store = build_store(config)?;
    let dispatchers = Arc::new(build_dispatchers(config));
    info!(channels = ?dispatchers.names(), "Alert channels");

    let pipeline = Arc::new(ItemPipeline::new(
        Arc::clone(&market),
        store,
        dispatchers,
        ProfitabilityEvaluator::default(),
    ));
    Ok(Poller::new(market, pipeline, config.poller.settings()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_channels_fall_back_to_log() {
        let config = Config::parse_toml("[alerts]\ndiscord = false\n").unwrap();
        let registry = build_dispatchers(&config);
        assert_eq!(registry.names(), vec!["log"]);
    }

    #[test]
    fn memory_store_builds() {
        let config = Config::default();
        let store = build_store(&config).unwrap();
        assert_eq!(store.backend_name(), "memory");
    }

    #[test]
    fn poller_uses_configured_settings() {
        let config = Config::parse_toml("[poller]\nworkers = 3\ninterval_secs = 30\n").unwrap();
        let poller = build_poller(&config).unwrap();
        assert_eq!(poller.settings().workers, 3);
        assert_eq!(poller.settings().interval.as_secs(), 30);
    }
}
