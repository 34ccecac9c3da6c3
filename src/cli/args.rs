//! CLI argument definitions using clap
//!
//! Commands:
//! - flightdb ingest --csv <FILE>... [--dir <DIR>] [--out-db <FILE>] [--errors <FILE>]
//! - flightdb query --db <FILE> --queries <FILE> [--query-results <FILE>]
//! - flightdb show --csv <FILE>... [--dir <DIR>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// flightdb - flight-schedule CSV ingestion, validation, and query tool
#[derive(Parser, Debug)]
#[command(name = "flightdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse and validate CSV files into a flight DB and error report
    Ingest {
        #[command(flatten)]
        sources: SourceArgs,

        /// Write valid flights to this JSON file
        #[arg(long, default_value = "db.json")]
        out_db: PathBuf,

        /// Write validation failures to this file
        #[arg(long, default_value = "errors.txt")]
        errors: PathBuf,

        /// Run the queries in this JSON file against the ingested flights
        #[arg(long)]
        queries: Option<PathBuf>,

        /// Where to write query results
        #[arg(long, default_value = "query_results.json")]
        query_results: PathBuf,
    },

    /// Run queries against a previously written flight DB
    Query {
        /// Load this JSON flight DB (bypasses CSV validation)
        #[arg(long)]
        db: PathBuf,

        /// JSON file containing the queries to run
        #[arg(long)]
        queries: PathBuf,

        /// Where to write query results
        #[arg(long, default_value = "query_results.json")]
        query_results: PathBuf,
    },

    /// Print raw CSV lines with line numbers, without validating
    Show {
        #[command(flatten)]
        sources: SourceArgs,
    },
}

/// CSV input selection shared by `ingest` and `show`
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// CSV files to read, in order
    #[arg(long = "csv", value_name = "FILE", num_args = 1..)]
    pub csv: Vec<PathBuf>,

    /// Read every .csv file in this directory (non-recursive, name order)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
