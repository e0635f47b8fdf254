//! CLI bootstrap: opens the optional outbox and picks a submission sink.

use std::path::PathBuf;

use anyhow::{Context, Result};
use pet_care_core::db::Database;
use pet_care_core::form::{LoggingSink, SubmissionSink};

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Outbox path; `None` means submissions are only logged.
    pub db_path: Option<PathBuf>,
}

impl CliConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            db_path: cli.db.clone(),
        }
    }
}

/// Infrastructure handed to command handlers.
pub struct CliContext {
    outbox: Option<Database>,
}

impl CliContext {
    pub fn outbox(&self) -> Option<&Database> {
        self.outbox.as_ref()
    }

    /// Sink for accepted consultations: the outbox when configured, else the log.
    pub fn sink(&mut self) -> Box<dyn SubmissionSink + '_> {
        match self.outbox.as_mut() {
            Some(db) => Box::new(db),
            None => Box::new(LoggingSink::new()),
        }
    }
}

/// Compose the CLI context from configuration.
pub fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let outbox = match &config.db_path {
        Some(path) => {
            let db = Database::open(path)
                .map_err(CliError::from)
                .with_context(|| format!("Failed to open outbox at {}", path.display()))?;
            Some(db)
        }
        None => None,
    };
    Ok(CliContext { outbox })
}
