//! CSV source discovery and reading
//!
//! Sources for one invocation are explicit files (in the order given)
//! followed by a directory's `*.csv` entries, non-recursive, sorted by file
//! name. Columns are matched by header name, so column order in the file
//! does not matter and unrecognized columns pass through into the row
//! snapshot.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use super::errors::{IngestError, IngestResult};
use super::row::RawRow;

/// Resolves the CSV sources for one invocation.
///
/// # Errors
///
/// Fails if `dir` is given but is not a directory, cannot be listed, or if
/// the combined selection is empty.
pub fn resolve_sources(files: &[PathBuf], dir: Option<&Path>) -> IngestResult<Vec<PathBuf>> {
    let mut sources: Vec<PathBuf> = files.to_vec();

    if let Some(dir) = dir {
        sources.extend(list_csv_files(dir)?);
    }

    if sources.is_empty() {
        return Err(IngestError::NoSources);
    }

    Ok(sources)
}

/// Lists `*.csv` files directly inside `dir`, sorted by file name.
/// Extension matching is case-insensitive.
fn list_csv_files(dir: &Path) -> IngestResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::NotADirectory(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|e| IngestError::SourceUnreadable {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| IngestError::SourceUnreadable {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Reads every record of one CSV file into raw rows.
///
/// The header row is required; each record is keyed by header names. Line
/// numbers are 1-based file positions (the header is line 1).
///
/// # Errors
///
/// Fails if the file cannot be opened or the csv decoder rejects any record
/// (including rows whose field count differs from the header).
pub fn read_rows(path: &Path) -> IngestResult<Vec<RawRow>> {
    let file = File::open(path).map_err(|e| IngestError::SourceUnreadable {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut reader = csv::Reader::from_reader(file);
    let headers = reader
        .headers()
        .map_err(|e| IngestError::MalformedCsv {
            path: path.to_path_buf(),
            source: e,
        })?
        .clone();

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| IngestError::MalformedCsv {
            path: path.to_path_buf(),
            source: e,
        })?;

        // First data record is line 2. The decoder position is preferred
        // since quoted fields may span lines.
        let line = record
            .position()
            .map_or(index as u64 + 2, |position| position.line());

        let fields = headers
            .iter()
            .zip(record.iter())
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        rows.push(RawRow::new(path, line, fields));
    }

    Ok(rows)
}
