//! Command-line interface definitions.
//!
//! Defines the CLI structure for the simcowatch application using `clap`:
//! the poll loop, an offline evaluator, the item reference table and
//! configuration utilities.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use super::paths;

/// SimCompanies market scanner and resale alerting CLI
#[derive(Parser, Debug)]
#[command(name = "simcowatch")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the simcowatch CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Poll the market and alert on profitable listings
    Run(RunArgs),

    /// Evaluate a single listing offline
    Evaluate(EvaluateArgs),

    /// List the item reference table
    Items,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `simcowatch config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Arguments for the `config init` subcommand.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the generated configuration file.
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,
    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Run a single poll cycle and exit.
    #[arg(long)]
    pub once: bool,

    /// Override the number of concurrent item workers.
    #[arg(long)]
    pub workers: Option<usize>,

    /// Override log level (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty-printed logs.
    #[arg(long)]
    pub json_logs: bool,
}

/// Arguments for the `evaluate` subcommand.
#[derive(Parser, Debug)]
pub struct EvaluateArgs {
    /// Item code.
    #[arg(long)]
    pub item: u32,

    /// Rolling average price of the item.
    #[arg(long)]
    pub avg: Decimal,

    /// Current transport unit price.
    #[arg(long, default_value = "0")]
    pub transport: Decimal,

    /// Listing price per unit.
    #[arg(long)]
    pub price: Decimal,

    /// Listing quantity.
    #[arg(long, default_value = "1")]
    pub quantity: u64,

    /// Listing quality.
    #[arg(long, default_value = "0")]
    pub quality: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn evaluate_parses_decimals() {
        let cli = Cli::parse_from([
            "simcowatch",
            "evaluate",
            "--item",
            "43",
            "--avg",
            "100",
            "--transport",
            "10",
            "--price",
            "70.5",
            "--quantity",
            "50",
        ]);
        match cli.command {
            Commands::Evaluate(args) => {
                assert_eq!(args.item, 43);
                assert_eq!(args.price, Decimal::new(705, 1));
                assert_eq!(args.quality, 0);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn run_defaults_to_local_config() {
        let cli = Cli::parse_from(["simcowatch", "run", "--once"]);
        match cli.command {
            Commands::Run(args) => {
                assert!(args.once);
                assert_eq!(args.config, paths::default_config());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
