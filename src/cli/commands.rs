//! CLI command implementations
//!
//! Each command runs one invocation to completion: load inputs, compute,
//! write outputs. Fatal errors propagate to main before any output file is
//! touched; row-level validation failures only ever reach the error report.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::db::{load_db, save_db, save_error_report};
use crate::ingest::{resolve_sources, DatasetBuilder};
use crate::model::Flight;
use crate::query::{load_queries, results_document, QueryEngine};

use super::args::{Cli, Command, SourceArgs};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Ingest {
            sources,
            out_db,
            errors,
            queries,
            query_results,
        } => ingest(&sources, &out_db, &errors, queries.as_deref(), &query_results),
        Command::Query {
            db,
            queries,
            query_results,
        } => query(&db, &queries, &query_results),
        Command::Show { sources } => show(&sources),
    }
}

/// Parse and validate CSV sources, write the DB and error report, then
/// optionally run a query file against the ingested flights.
pub fn ingest(
    sources: &SourceArgs,
    out_db: &Path,
    errors: &Path,
    queries: Option<&Path>,
    query_results: &Path,
) -> CliResult<()> {
    let paths = resolve_sources(&sources.csv, sources.dir.as_deref())?;

    let mut builder = DatasetBuilder::new();
    builder.ingest_sources(&paths)?;
    let dataset = builder.finish();

    println!(
        "Parsed: {} valid flights, {} errors",
        dataset.flights.len(),
        dataset.failures.len()
    );

    save_db(out_db, &dataset.flights)?;
    println!("Saved DB to {}", out_db.display());

    if !dataset.failures.is_empty() {
        save_error_report(errors, &dataset.failures)?;
        println!("Saved errors to {}", errors.display());
    }

    if let Some(queries) = queries {
        run_query_file(&dataset.flights, queries, query_results)?;
    }

    Ok(())
}

/// Load an existing flight DB and run a query file against it.
pub fn query(db: &Path, queries: &Path, query_results: &Path) -> CliResult<()> {
    let flights = load_db(db)?;
    println!("Loaded {} flights from {}", flights.len(), db.display());

    run_query_file(&flights, queries, query_results)
}

/// Print raw CSV content lines prefixed with 1-based line numbers.
/// Blank lines are skipped; no validation happens here.
pub fn show(sources: &SourceArgs) -> CliResult<()> {
    let paths = resolve_sources(&sources.csv, sources.dir.as_deref())?;

    for path in &paths {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::io_error(format!("cannot read {}: {}", path.display(), e)))?;
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            println!("{}: Line {}: {}", path.display(), index + 1, line);
        }
    }

    Ok(())
}

/// Load a query file up front, evaluate it, and write the results document.
fn run_query_file(flights: &[Flight], queries: &Path, query_results: &Path) -> CliResult<()> {
    let specs = load_queries(queries)?;
    let results = QueryEngine::run(flights, &specs);
    let document = results_document(&results);

    write_results(query_results, &document)?;
    println!("Wrote query results to {}", query_results.display());

    Ok(())
}

fn write_results(path: &Path, document: &serde_json::Value) -> CliResult<()> {
    let file = File::create(path)
        .map_err(|e| CliError::io_error(format!("cannot write {}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, document)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
