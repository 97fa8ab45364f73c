//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::config::store::StoreConfig;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note("2. Set DISCORD_WEBHOOK_URL and FIREBASE_AUTH_TOKEN");
    output::note(&format!(
        "3. Run: simcowatch config validate -c {}",
        path.display()
    ));
    output::note(&format!("4. Run: simcowatch run -c {}", path.display()));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = Config::load(path)?;

    output::section("Market");
    output::field("API", &config.market.api_url);
    output::field("Realm", config.market.realm);
    output::field("Timeout", format!("{}ms", config.market.http.timeout_ms));

    output::section("Poller");
    output::field("Workers", config.poller.workers);
    output::field("Interval", format!("{}s", config.poller.interval_secs));
    output::field("Retry", format!("{}s", config.poller.retry_delay_secs));

    output::section("Store");
    output::field("Backend", config.store.backend_name());
    if let StoreConfig::Firebase(firebase) = &config.store {
        output::field("Database", &firebase.database_url);
        if firebase.auth_token.is_some() {
            output::success("Auth token loaded from FIREBASE_AUTH_TOKEN");
        } else {
            output::warning("FIREBASE_AUTH_TOKEN not set");
        }
    }

    output::section("Alerts");
    output::field("Discord", enabled(config.alerts.discord));
    if let Some(footer) = &config.alerts.footer {
        output::field("Footer", footer);
    }
    output::field("Telegram", enabled(config.alerts.telegram));

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());
    let config = Config::load(path)?;
    output::success("Config file is valid");

    let warnings = warnings(&config);
    if !warnings.is_empty() {
        output::section("Warnings");
        for warning in &warnings {
            output::warning(warning);
        }
    }

    output::field(
        "Next",
        format!("simcowatch config show -c {}", path.display()),
    );

    Ok(())
}

fn enabled(flag: bool) -> &'static str {
    if flag {
        "enabled"
    } else {
        "disabled"
    }
}

/// Non-fatal issues worth pointing out before a run.
fn warnings(config: &Config) -> Vec<String> {
    let mut warnings = Vec::new();
    if matches!(config.store, StoreConfig::Memory) {
        warnings.push("memory store has no average prices; nothing will be evaluated".to_string());
    }
    if !config.alerts.discord && !config.alerts.telegram {
        warnings.push("all alert channels disabled; alerts will only be logged".to_string());
    }
    warnings
}
