//! Terminal front-end for the pet care guide.
//!
//! The binary in `main.rs` is the composition root: it loads `.env`, parses
//! arguments, sets up logging, opens the optional outbox and dispatches to a
//! handler. Handlers are thin: they drive `pet-care-core` and format output.

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

pub use bootstrap::{bootstrap, CliConfig, CliContext};
pub use commands::{Commands, ConsultArgs};
pub use error::CliError;
pub use parser::Cli;
