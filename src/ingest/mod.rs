//! CSV ingestion subsystem
//!
//! Reads raw rows from one or more CSV sources, validates each against the
//! flight schema, and partitions them into valid flights and validation
//! failures. Row failures are collected and reported; unreadable or
//! undecodable sources abort the run.

mod builder;
mod errors;
mod row;
mod sources;
mod validator;

pub use builder::{Dataset, DatasetBuilder};
pub use errors::{IngestError, IngestResult, ValidationFailure};
pub use row::RawRow;
pub use sources::{read_rows, resolve_sources};
pub use validator::RowValidator;
