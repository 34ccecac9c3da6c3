//! Query file error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for query-file operations
pub type QueryFileResult<T> = Result<T, QueryError>;

/// Query file errors. Both are fatal for the run.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Query file cannot be opened or read
    #[error("cannot read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Query file is not a well-formed query array. Malformed datetime
    /// bounds land here too: the whole file is rejected, not one query.
    #[error("malformed query file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
