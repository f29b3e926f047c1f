//! CLI entry point.
//!
//! Wires logging and environment, bootstraps the `CliContext`, and routes
//! each command to its handler.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use vimlink_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn main() -> ExitCode {
    // Load environment variables before clap reads `env = ...` fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            eprintln!("Error: {err:#}");
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::from_cli(&cli)?;

    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = bootstrap(config)?;

    match command {
        Commands::Discover => handlers::installations::discover(&ctx)?,
        Commands::Use { path } => handlers::installations::use_installation(&ctx, &path)?,
        Commands::Which { path } => handlers::installations::which(&ctx, &path)?,
        Commands::Prefs { command } => handlers::prefs::execute(&ctx, command)?,
        Commands::Open {
            file, line, column, ..
        } => handlers::open::execute(&ctx, &file, line, column)?,
        Commands::Args { file, line, column } => {
            handlers::open::print_arguments(&ctx, &file, line, column)?;
        }
        Commands::Sync { command } => handlers::sync::execute(&ctx, command)?,
    }

    Ok(())
}
