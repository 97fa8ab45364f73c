//! Handler for the `run` command.

use tokio::signal;
use tracing::info;

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::output;
use crate::application::CycleReport;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::{Config, MAX_WORKERS};

/// Execute the run command.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let mut config = Config::load(&args.config)?;
    apply_overrides(&mut config, args, output::verbosity());
    config.init_logging();

    let poller = bootstrap::build_poller(&config)?;
    print_startup(&config, args.once);

    if args.once {
        let report = poller.run_cycle().await?;
        print_report(&report);
        return Ok(());
    }

    info!("simcowatch starting");
    tokio::select! {
        () = poller.run() => {}
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }
    info!("simcowatch stopped");
    Ok(())
}

fn apply_overrides(config: &mut Config, args: &RunArgs, verbosity: u8) {
    if let Some(workers) = args.workers {
        config.poller.workers = workers.clamp(1, MAX_WORKERS);
    }
    if let Some(level) = &args.log_level {
        config.logging.level.clone_from(level);
    } else if let Some(level) = verbose_level(verbosity) {
        config.logging.level = level.to_string();
    }
    if args.json_logs || output::is_json() {
        config.logging.format = "json".to_string();
    }
}

/// Log level implied by repeated `-v` flags.
const fn verbose_level(verbosity: u8) -> Option<&'static str> {
    match verbosity {
        0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    }
}

fn print_startup(config: &Config, once: bool) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Realm", config.market.realm);
    output::field("Store", config.store.backend_name());
    output::field("Workers", config.poller.workers);
    if output::verbosity() > 0 {
        output::field("API", &config.market.api_url);
        output::field("Log level", &config.logging.level);
    }
    if once {
        output::field("Mode", "single cycle");
    } else {
        output::field("Interval", format!("{}s", config.poller.interval_secs));
    }
}

fn print_report(report: &CycleReport) {
    output::section("Cycle");
    output::field("Items", report.items);
    output::field("Recorded", report.recorded);
    output::field("Alerted", report.alerted);
    output::field("No listing", report.no_listing);
    output::field("Skipped", report.skipped);
    output::field("Undefined", report.undefined);
}
