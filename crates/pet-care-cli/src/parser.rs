//! Root CLI parser and global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Pet care recommendations and veterinary consultation requests.
#[derive(Parser, Debug)]
#[command(name = "pet-care")]
#[command(about = "Pet care recommendations and veterinary consultations")]
#[command(version)]
pub struct Cli {
    /// SQLite outbox for submitted consultations (log only when unset)
    #[arg(long = "db", env = "PET_CARE_DB", global = true)]
    pub db: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::try_parse_from(["pet-care", "--db", "/tmp/outbox.db", "-v", "history"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/outbox.db")));
        assert!(matches!(cli.command, Commands::History { limit: 20 }));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["pet-care"]).is_err());
    }
}
