//! CLI-specific error types
//!
//! Everything surfacing here is fatal: main prints the error and exits
//! non-zero. Row-level validation failures never reach this type; they go
//! to the error report and the run completes successfully.

use std::fmt;
use std::io;

use crate::db::DbError;
use crate::ingest::IngestError;
use crate::query::QueryError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Invalid input selection
    UsageError,
    /// I/O error on an input or output path
    IoError,
    /// Flight DB could not be written, encoded, or loaded
    DbError,
    /// Query file could not be loaded
    QueryError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::UsageError => "FLIGHTDB_CLI_USAGE_ERROR",
            Self::IoError => "FLIGHTDB_CLI_IO_ERROR",
            Self::DbError => "FLIGHTDB_CLI_DB_ERROR",
            Self::QueryError => "FLIGHTDB_CLI_QUERY_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Usage error
    pub fn usage_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::UsageError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<IngestError> for CliError {
    fn from(e: IngestError) -> Self {
        match e {
            IngestError::NoSources => Self::usage_error(
                "provide --csv <FILE>... and/or --dir <DIR> with at least one CSV file",
            ),
            other => Self::io_error(other.to_string()),
        }
    }
}

impl From<DbError> for CliError {
    fn from(e: DbError) -> Self {
        Self::new(CliErrorCode::DbError, e.to_string())
    }
}

impl From<QueryError> for CliError {
    fn from(e: QueryError) -> Self {
        Self::new(CliErrorCode::QueryError, e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
