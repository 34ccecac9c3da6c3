//! Query Pipeline Tests
//!
//! End-to-end invariants of the DB load → query engine → results path:
//! - Existing-DB mode bypasses CSV validation entirely
//! - The query file is parsed up front; a malformed file runs no queries
//! - The results document maps each query's name (or position) to its
//!   matches, in input flight order

use std::fs;
use std::path::Path;

use flightdb::cli::{self, CliErrorCode, Command};
use flightdb::db::save_db;
use flightdb::model::Flight;
use tempfile::TempDir;

// =============================================================================
// Test Utilities
// =============================================================================

fn flight(number: &str, origin: &str, departure: &str, arrival: &str) -> Flight {
    Flight {
        flight_number: number.into(),
        origin: origin.into(),
        destination: "LAX".into(),
        departure: departure.parse().unwrap(),
        arrival: arrival.parse().unwrap(),
    }
}

fn sample_db(path: &Path) {
    save_db(
        path,
        &[
            flight("AA100", "JFK", "2025-01-01 10:00", "2025-01-01 13:00"),
            flight("UA200", "LAX", "2025-01-02 10:00", "2025-01-02 16:00"),
        ],
    )
    .unwrap();
}

fn query_command(dir: &Path, queries: &str) -> Command {
    let queries_path = dir.join("queries.json");
    fs::write(&queries_path, queries).unwrap();
    Command::Query {
        db: dir.join("db.json"),
        queries: queries_path,
        query_results: dir.join("results.json"),
    }
}

fn results(dir: &Path) -> serde_json::Value {
    let content = fs::read_to_string(dir.join("results.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

// =============================================================================
// Matching through the full path
// =============================================================================

#[test]
fn test_equality_and_window_queries() {
    let temp = TempDir::new().unwrap();
    sample_db(&temp.path().join("db.json"));

    cli::run_command(query_command(
        temp.path(),
        r#"[
            {"name": "from-jfk", "filter": {"origin": "JFK"}},
            {"name": "second-day",
             "departure_between": ["2025-01-02 00:00", "2025-01-03 00:00"]}
        ]"#,
    ))
    .unwrap();

    let doc = results(temp.path());
    let from_jfk = doc["from-jfk"].as_array().unwrap();
    assert_eq!(from_jfk.len(), 1);
    assert_eq!(from_jfk[0]["flight_number"], "AA100");

    let second_day = doc["second-day"].as_array().unwrap();
    assert_eq!(second_day.len(), 1);
    assert_eq!(second_day[0]["flight_number"], "UA200");
}

#[test]
fn test_strict_arrival_bounds() {
    let temp = TempDir::new().unwrap();
    sample_db(&temp.path().join("db.json"));

    cli::run_command(query_command(
        temp.path(),
        r#"[
            {"name": "before", "arrival_before": "2025-01-01 13:00"},
            {"name": "after", "arrival_after": "2025-01-01 13:00"}
        ]"#,
    ))
    .unwrap();

    let doc = results(temp.path());
    // arrival == bound matches neither direction.
    assert_eq!(doc["before"].as_array().unwrap().len(), 0);
    let after = doc["after"].as_array().unwrap();
    assert_eq!(after.len(), 1);
    assert_eq!(after[0]["flight_number"], "UA200");
}

#[test]
fn test_unnamed_queries_keyed_by_position() {
    let temp = TempDir::new().unwrap();
    sample_db(&temp.path().join("db.json"));

    cli::run_command(query_command(
        temp.path(),
        r#"[{}, {"filter": {"origin": "LAX"}}]"#,
    ))
    .unwrap();

    let doc = results(temp.path());
    assert_eq!(doc["q1"].as_array().unwrap().len(), 2);
    let q2 = doc["q2"].as_array().unwrap();
    assert_eq!(q2.len(), 1);
    assert_eq!(q2[0]["flight_number"], "UA200");
}

#[test]
fn test_unknown_query_keys_ignored() {
    let temp = TempDir::new().unwrap();
    sample_db(&temp.path().join("db.json"));

    cli::run_command(query_command(
        temp.path(),
        r#"[{"name": "all", "sort_by": "price", "limit": 1}]"#,
    ))
    .unwrap();

    // The unsupported keys are no-ops, not predicates.
    assert_eq!(results(temp.path())["all"].as_array().unwrap().len(), 2);
}

#[test]
fn test_serialized_matches_keep_canonical_datetimes() {
    let temp = TempDir::new().unwrap();
    sample_db(&temp.path().join("db.json"));

    cli::run_command(query_command(
        temp.path(),
        r#"[{"name": "all"}]"#,
    ))
    .unwrap();

    let doc = results(temp.path());
    assert_eq!(doc["all"][0]["departure"], "2025-01-01T10:00:00");
}

// =============================================================================
// Existing-DB mode
// =============================================================================

#[test]
fn test_existing_db_mode_bypasses_validation() {
    let temp = TempDir::new().unwrap();
    // arrival precedes departure; a loadable DB is taken as-is.
    save_db(
        &temp.path().join("db.json"),
        &[flight("XX900", "AAA", "2025-01-01 13:00", "2025-01-01 10:00")],
    )
    .unwrap();

    cli::run_command(query_command(temp.path(), r#"[{"name": "all"}]"#)).unwrap();

    assert_eq!(results(temp.path())["all"].as_array().unwrap().len(), 1);
}

// =============================================================================
// Ingest-then-query in one invocation
// =============================================================================

#[test]
fn test_ingest_runs_queries_in_same_invocation() {
    let temp = TempDir::new().unwrap();
    let csv_path = temp.path().join("flights.csv");
    fs::write(
        &csv_path,
        "flight_number,origin,destination,departure,arrival\n\
         AA100,JFK,LAX,2025-01-01 10:00,2025-01-01 13:00\n",
    )
    .unwrap();
    let queries_path = temp.path().join("queries.json");
    fs::write(&queries_path, r#"[{"name": "all"}]"#).unwrap();

    cli::run_command(Command::Ingest {
        sources: cli::SourceArgs {
            csv: vec![csv_path],
            dir: None,
        },
        out_db: temp.path().join("db.json"),
        errors: temp.path().join("errors.txt"),
        queries: Some(queries_path),
        query_results: temp.path().join("results.json"),
    })
    .unwrap();

    assert!(temp.path().join("db.json").exists());
    assert_eq!(results(temp.path())["all"].as_array().unwrap().len(), 1);
}

// =============================================================================
// Fatal paths
// =============================================================================

#[test]
fn test_missing_db_is_fatal() {
    let temp = TempDir::new().unwrap();
    let err = cli::run_command(query_command(temp.path(), "[]")).unwrap_err();
    assert_eq!(err.code(), &CliErrorCode::DbError);
}

#[test]
fn test_malformed_db_is_fatal() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("db.json"),
        r#"[{"flight_number": "AA100"}]"#,
    )
    .unwrap();
    let err = cli::run_command(query_command(temp.path(), "[]")).unwrap_err();
    assert_eq!(err.code(), &CliErrorCode::DbError);
}

#[test]
fn test_malformed_query_bound_fails_whole_file() {
    let temp = TempDir::new().unwrap();
    sample_db(&temp.path().join("db.json"));

    // First query is fine, second carries a bad bound: nothing runs.
    let err = cli::run_command(query_command(
        temp.path(),
        r#"[
            {"name": "ok", "filter": {"origin": "JFK"}},
            {"name": "broken", "arrival_before": "sometime"}
        ]"#,
    ))
    .unwrap_err();

    assert_eq!(err.code(), &CliErrorCode::QueryError);
    assert!(!temp.path().join("results.json").exists());
}

#[test]
fn test_empty_query_file_writes_empty_document() {
    let temp = TempDir::new().unwrap();
    sample_db(&temp.path().join("db.json"));

    cli::run_command(query_command(temp.path(), "[]")).unwrap();

    assert_eq!(
        fs::read_to_string(temp.path().join("results.json")).unwrap(),
        "{}\n"
    );
}
