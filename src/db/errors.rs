//! DB codec error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for DB codec operations
pub type DbResult<T> = Result<T, DbError>;

/// DB codec errors. All of these are fatal for the run.
#[derive(Debug, Error)]
pub enum DbError {
    /// DB file cannot be opened or read
    #[error("cannot read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Output file cannot be created or written
    #[error("cannot write {path}: {source}")]
    Unwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// DB file is not a well-formed flight array
    #[error("malformed flight DB {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Flight sequence could not be encoded
    #[error("cannot encode flight DB {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
