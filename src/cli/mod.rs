//! CLI module for flightdb
//!
//! Provides command-line interface for:
//! - ingest: Parse and validate CSV files into a flight DB and error report
//! - query: Run a query file against a previously written flight DB
//! - show: Print raw CSV lines with line numbers, for inspection

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, SourceArgs};
pub use commands::{ingest, query, run, run_command, show};
pub use errors::{CliError, CliErrorCode, CliResult};
