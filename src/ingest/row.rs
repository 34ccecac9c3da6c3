//! Raw CSV rows

use std::path::{Path, PathBuf};

/// One CSV record prior to validation: field name to value, in column order,
/// plus where the record came from.
///
/// Column order is kept so the error report shows the row as it appeared in
/// the file. Extra unrecognized columns stay in the snapshot but never reach
/// a `Flight`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    source: PathBuf,
    line: u64,
    fields: Vec<(String, String)>,
}

impl RawRow {
    pub fn new(source: impl Into<PathBuf>, line: u64, fields: Vec<(String, String)>) -> Self {
        Self {
            source: source.into(),
            line,
            fields,
        }
    }

    /// Looks up a field value by column name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// The file this row was read from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// 1-based line number within the source file (the header is line 1).
    pub fn line(&self) -> u64 {
        self.line
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Renders the row as `name=value, name=value` in column order, for the
    /// error report.
    pub fn render(&self) -> String {
        self.fields
            .iter()
            .map(|(field, value)| format!("{}={}", field, value))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RawRow {
        RawRow::new(
            "flights.csv",
            2,
            vec![
                ("flight_number".into(), "AA100".into()),
                ("origin".into(), "JFK".into()),
            ],
        )
    }

    #[test]
    fn test_get_by_name() {
        let row = sample();
        assert_eq!(row.get("origin"), Some("JFK"));
        assert_eq!(row.get("destination"), None);
    }

    #[test]
    fn test_render_keeps_column_order() {
        assert_eq!(sample().render(), "flight_number=AA100, origin=JFK");
    }
}
