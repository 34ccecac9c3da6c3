//! Query evaluation
//!
//! Evaluates each spec against every flight. All present predicates must
//! hold (AND semantics); matches keep the input flight order. Missing
//! filter fields never match, and no type coercion happens anywhere.

use serde_json::Value;

use crate::model::Flight;

use super::spec::QuerySpec;

/// Matches for one query: its resolved name and the matching flights in
/// input order.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryMatches {
    pub name: String,
    pub matches: Vec<Flight>,
}

/// Evaluates query specs against a flight sequence.
pub struct QueryEngine;

impl QueryEngine {
    /// Runs every query against every flight.
    ///
    /// Unnamed queries are keyed `q<position>`, 1-based. Each query is
    /// independent; results are returned in query order.
    pub fn run(flights: &[Flight], queries: &[QuerySpec]) -> Vec<QueryMatches> {
        queries
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                let name = spec
                    .name
                    .clone()
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| format!("q{}", index + 1));
                let matches = flights
                    .iter()
                    .filter(|flight| Self::matches(flight, spec))
                    .cloned()
                    .collect();
                QueryMatches { name, matches }
            })
            .collect()
    }

    /// Checks one flight against one spec.
    pub fn matches(flight: &Flight, spec: &QuerySpec) -> bool {
        for (field, expected) in &spec.filter {
            match flight.field_text(field) {
                Some(actual) if actual == *expected => {}
                _ => return false,
            }
        }

        if let Some((lo, hi)) = &spec.departure_between {
            let departure = flight.departure.instant();
            if departure < lo.instant() || departure > hi.instant() {
                return false;
            }
        }

        if let Some(bound) = &spec.arrival_before {
            if flight.arrival.instant() >= bound.instant() {
                return false;
            }
        }

        if let Some(bound) = &spec.arrival_after {
            if flight.arrival.instant() <= bound.instant() {
                return false;
            }
        }

        true
    }
}

/// Renders the results document: a JSON object mapping each query's name to
/// its matching flight array, in query order.
pub fn results_document(results: &[QueryMatches]) -> Value {
    let mut document = serde_json::Map::new();
    for result in results {
        document.insert(
            result.name.clone(),
            serde_json::json!(result.matches),
        );
    }
    Value::Object(document)
}
