use std::process::ExitCode;

use clap::Parser;

use simcowatch::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand};
use simcowatch::adapter::inbound::cli::output::{self, OutputConfig};
use simcowatch::adapter::inbound::cli::{config, evaluate, items, run};

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    let result = match &cli.command {
        Commands::Run(args) => run::execute(args).await,
        Commands::Evaluate(args) => evaluate::execute(args),
        Commands::Items => items::list(),
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
        Commands::Config(ConfigCommand::Show(args)) => config::execute_show(&args.config),
        Commands::Config(ConfigCommand::Validate(args)) => config::execute_validate(&args.config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
