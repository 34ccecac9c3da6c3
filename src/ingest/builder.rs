//! Dataset builder
//!
//! Accumulates the two ordered output sequences of an ingestion run. Every
//! input row lands in exactly one of them, and output order matches input
//! order across all sources.

use std::path::PathBuf;

use crate::model::Flight;

use super::errors::{IngestResult, ValidationFailure};
use super::row::RawRow;
use super::sources::read_rows;
use super::validator::RowValidator;

/// Partition of one ingestion run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Rows that passed validation, in input order.
    pub flights: Vec<Flight>,
    /// Rows that failed validation, in input order.
    pub failures: Vec<ValidationFailure>,
}

/// Runs raw rows through the validator, accumulating the partition.
///
/// No cross-file bookkeeping happens here: duplicate flight numbers across
/// sources are all kept.
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    dataset: Dataset,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates one row into the partition.
    pub fn push(&mut self, row: RawRow) {
        match RowValidator::validate(&row) {
            Ok(flight) => self.dataset.flights.push(flight),
            Err(reasons) => self
                .dataset
                .failures
                .push(ValidationFailure::new(row, reasons)),
        }
    }

    /// Reads and validates every source, in the order given.
    ///
    /// # Errors
    ///
    /// An unreadable or undecodable source aborts the build; rows already
    /// accumulated are kept in the builder but the caller is expected to
    /// treat the run as failed before writing any output.
    pub fn ingest_sources(&mut self, sources: &[PathBuf]) -> IngestResult<()> {
        for path in sources {
            for row in read_rows(path)? {
                self.push(row);
            }
        }
        Ok(())
    }

    /// Finishes the build, yielding the partition.
    pub fn finish(self) -> Dataset {
        self.dataset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(line: u64, flight_number: &str, departure: &str) -> RawRow {
        RawRow::new(
            "test.csv",
            line,
            vec![
                ("flight_number".into(), flight_number.into()),
                ("origin".into(), "JFK".into()),
                ("destination".into(), "LAX".into()),
                ("departure".into(), departure.into()),
                ("arrival".into(), "2025-01-01 13:00".into()),
            ],
        )
    }

    #[test]
    fn test_partition_preserves_order() {
        let mut builder = DatasetBuilder::new();
        builder.push(row(2, "AA100", "2025-01-01 10:00"));
        builder.push(row(3, "", "2025-01-01 10:00"));
        builder.push(row(4, "UA200", "2025-01-01 11:00"));

        let dataset = builder.finish();
        assert_eq!(dataset.flights.len(), 2);
        assert_eq!(dataset.flights[0].flight_number, "AA100");
        assert_eq!(dataset.flights[1].flight_number, "UA200");
        assert_eq!(dataset.failures.len(), 1);
        assert_eq!(dataset.failures[0].row().line(), 3);
    }

    #[test]
    fn test_no_row_dropped() {
        let mut builder = DatasetBuilder::new();
        for i in 0..10 {
            let departure = if i % 2 == 0 { "2025-01-01 10:00" } else { "bad" };
            builder.push(row(i + 2, "AA100", departure));
        }
        let dataset = builder.finish();
        assert_eq!(dataset.flights.len() + dataset.failures.len(), 10);
    }

    #[test]
    fn test_duplicates_kept() {
        let mut builder = DatasetBuilder::new();
        builder.push(row(2, "AA100", "2025-01-01 10:00"));
        builder.push(row(3, "AA100", "2025-01-01 10:00"));
        let dataset = builder.finish();
        assert_eq!(dataset.flights.len(), 2);
    }

    #[test]
    fn test_build_is_deterministic() {
        let build = || {
            let mut builder = DatasetBuilder::new();
            builder.push(row(2, "AA100", "2025-01-01 10:00"));
            builder.push(row(3, "", "nope"));
            builder.finish()
        };
        assert_eq!(build(), build());
    }
}
