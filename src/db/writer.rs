//! Flight DB and error report writing

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::ingest::ValidationFailure;
use crate::model::Flight;

use super::errors::{DbError, DbResult};

/// Writes the valid-flight sequence as a pretty-printed JSON array.
///
/// Array order equals input order; keys per object are exactly
/// `flight_number, origin, destination, departure, arrival` with datetimes
/// in canonical form.
pub fn save_db(path: &Path, flights: &[Flight]) -> DbResult<()> {
    let file = File::create(path).map_err(|e| DbError::Unwritable {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, flights).map_err(|e| DbError::Encode {
        path: path.to_path_buf(),
        source: e,
    })?;
    writeln!(writer).map_err(|e| DbError::Unwritable {
        path: path.to_path_buf(),
        source: e,
    })?;
    writer.flush().map_err(|e| DbError::Unwritable {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Writes the error report: one line per validation failure, in builder
/// order.
pub fn save_error_report(path: &Path, failures: &[ValidationFailure]) -> DbResult<()> {
    let file = File::create(path).map_err(|e| DbError::Unwritable {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    for failure in failures {
        writeln!(writer, "{}", failure.report_line()).map_err(|e| DbError::Unwritable {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    writer.flush().map_err(|e| DbError::Unwritable {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
