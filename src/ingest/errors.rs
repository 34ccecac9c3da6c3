//! Ingestion error types
//!
//! Two distinct severities live here. `IngestError` is fatal: an unreadable
//! or undecodable source aborts the run before any output is written.
//! `ValidationFailure` is not a Rust error at all: row-level defects are
//! collected into the error report and the run continues.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::row::RawRow;

/// Result type for ingestion operations
pub type IngestResult<T> = Result<T, IngestError>;

/// Fatal ingestion errors
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source file cannot be opened or read
    #[error("cannot read {path}: {source}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Directory argument does not name a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The csv decoder rejected the file structure
    #[error("malformed CSV in {path}: {source}")]
    MalformedCsv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// No CSV sources were selected
    #[error("no CSV sources given")]
    NoSources,
}

/// A row that failed validation: the raw row snapshot plus every reason, in
/// field-check order.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationFailure {
    row: RawRow,
    reasons: Vec<String>,
}

impl ValidationFailure {
    pub fn new(row: RawRow, reasons: Vec<String>) -> Self {
        Self { row, reasons }
    }

    pub fn row(&self) -> &RawRow {
        &self.row
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    /// One error-report line: provenance, the row as it appeared, then all
    /// reasons.
    pub fn report_line(&self) -> String {
        format!(
            "{}:{}: {} -- {}",
            self.row.source().display(),
            self.row.line(),
            self.row.render(),
            self.reasons.join("; ")
        )
    }
}
