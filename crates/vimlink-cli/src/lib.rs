//! Terminal host for vimlink.
//!
//! Parses the command line, composes the core service with the runtime
//! adapters, and dispatches to handlers.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs only
use dotenvy as _;
use tracing_subscriber as _;

#[cfg(test)]
use tempfile as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{Commands, PrefsCommand, SyncCommand};
pub use error::CliError;
pub use parser::Cli;
