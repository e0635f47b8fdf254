//! CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use pet_care_cli::error::exit_code_for;
use pet_care_cli::{bootstrap, handlers, Cli, CliConfig, Commands};

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::from_cli(&cli);

    match cli.command {
        Commands::Pets { selected } => handlers::pets::execute(selected),
        Commands::Guide { pet, json } => handlers::guide::execute(pet, json),
        Commands::Catalog => handlers::catalog::execute(),
        Commands::Consult(args) => {
            let mut ctx = bootstrap(config)?;
            handlers::consult::execute(&mut ctx, args)
        }
        Commands::History { limit } => {
            let ctx = bootstrap(config)?;
            handlers::history::execute(&ctx, limit)
        }
    }
}

fn main() -> ExitCode {
    // Load .env before parsing so PET_CARE_DB can come from it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", style("error:").red().bold(), err);
            ExitCode::from(exit_code_for(&err))
        }
    }
}
