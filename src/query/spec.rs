//! Query specifications
//!
//! A query file is a JSON array of objects with optional keys `name`,
//! `filter`, `departure_between`, `arrival_before`, `arrival_after`.
//! Unknown keys are ignored so older files keep loading against newer
//! tools. Datetime bounds parse at load time; a malformed bound fails the
//! whole file.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::model::ScheduleTime;

use super::errors::{QueryError, QueryFileResult};

/// One query: a predicate set evaluated against every flight.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QuerySpec {
    /// Key for this query in the results document. Unnamed queries are
    /// keyed by position instead.
    #[serde(default)]
    pub name: Option<String>,

    /// Exact, case-sensitive equality per field.
    #[serde(default)]
    pub filter: BTreeMap<String, String>,

    /// Inclusive departure window `[lo, hi]`.
    #[serde(default)]
    pub departure_between: Option<(ScheduleTime, ScheduleTime)>,

    /// Strict upper bound on arrival.
    #[serde(default)]
    pub arrival_before: Option<ScheduleTime>,

    /// Strict lower bound on arrival.
    #[serde(default)]
    pub arrival_after: Option<ScheduleTime>,
}

impl QuerySpec {
    /// Whether the spec constrains anything. An empty spec matches every
    /// flight.
    pub fn is_unconstrained(&self) -> bool {
        self.filter.is_empty()
            && self.departure_between.is_none()
            && self.arrival_before.is_none()
            && self.arrival_after.is_none()
    }
}

/// Loads and parses a query file up front.
///
/// # Errors
///
/// `QueryError::Unreadable` if the file cannot be read,
/// `QueryError::Malformed` if any entry is structurally bad or carries a
/// malformed datetime bound.
pub fn load_queries(path: &Path) -> QueryFileResult<Vec<QuerySpec>> {
    let content = fs::read_to_string(path).map_err(|e| QueryError::Unreadable {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| QueryError::Malformed {
        path: path.to_path_buf(),
        source: e,
    })
}
