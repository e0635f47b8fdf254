//! CLI-specific error types and exit codes.

use pet_care_core::catalog::ContentError;
use pet_care_core::db::DbError;
use pet_care_core::form::{SinkError, SubmitError};
use rustyline::error::ReadlineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Consultation form failed validation.
    #[error("{0}")]
    Validation(String),

    /// Outbox could not be opened or written.
    #[error("Database error: {0}")]
    Database(String),

    /// Shipped care content failed its audit.
    #[error("Content error: {0}")]
    Content(String),

    /// Terminal input failed.
    #[error("IO error: {0}")]
    Io(String),

    /// User aborted an interactive prompt.
    #[error("Cancelled")]
    Cancelled,
}

impl CliError {
    /// Map error to an exit code (sysexits.h where one fits).
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Validation(_) => 2,
            CliError::Database(_) => 73, // EX_CANTCREAT
            CliError::Content(_) => 65,  // EX_DATAERR
            CliError::Io(_) => 74,       // EX_IOERR
            CliError::Cancelled => 130,
        }
    }
}

impl From<DbError> for CliError {
    fn from(err: DbError) -> Self {
        CliError::Database(err.to_string())
    }
}

impl From<SubmitError> for CliError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Invalid(errors) => CliError::Validation(errors.to_string()),
            SubmitError::Sink(SinkError::Storage(db)) => db.into(),
            SubmitError::Sink(other) => CliError::Database(other.to_string()),
        }
    }
}

impl From<ContentError> for CliError {
    fn from(err: ContentError) -> Self {
        CliError::Content(err.to_string())
    }
}

impl From<ReadlineError> for CliError {
    fn from(err: ReadlineError) -> Self {
        match err {
            ReadlineError::Interrupted | ReadlineError::Eof => CliError::Cancelled,
            other => CliError::Io(other.to_string()),
        }
    }
}

/// Exit code for any error reaching `main`.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<CliError>()
        .map(CliError::exit_code)
        .unwrap_or(1)
}
