//! Flight DB loading

use std::fs;
use std::path::Path;

use crate::model::Flight;

use super::errors::{DbError, DbResult};

/// Loads a previously written flight DB.
///
/// All-or-nothing: a missing key, extra key, or unparseable datetime in any
/// entry fails the whole load. There is no partial recovery on this path.
///
/// # Errors
///
/// `DbError::Unreadable` if the file cannot be read, `DbError::Malformed`
/// if it is not a well-formed flight array.
pub fn load_db(path: &Path) -> DbResult<Vec<Flight>> {
    let content = fs::read_to_string(path).map_err(|e| DbError::Unreadable {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| DbError::Malformed {
        path: path.to_path_buf(),
        source: e,
    })
}
