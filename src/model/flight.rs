//! The Flight record

use serde::{Deserialize, Serialize};

use super::time::ScheduleTime;

/// A validated, normalized schedule record.
///
/// Constructed only by the row validator (or deserialized from a DB the
/// writer produced) and immutable thereafter. String fields are non-empty
/// and trimmed; datetimes render in canonical form on serialization.
///
/// `deny_unknown_fields` makes a DB load all-or-nothing: an entry with a
/// missing, extra, or unparseable field fails the whole array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Flight {
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure: ScheduleTime,
    pub arrival: ScheduleTime,
}

impl Flight {
    /// Renders the named field as a string, for equality filters.
    ///
    /// Returns `None` for a name that is not a Flight field; the query
    /// engine treats that as no match.
    pub fn field_text(&self, name: &str) -> Option<String> {
        match name {
            "flight_number" => Some(self.flight_number.clone()),
            "origin" => Some(self.origin.clone()),
            "destination" => Some(self.destination.clone()),
            "departure" => Some(self.departure.to_string()),
            "arrival" => Some(self.arrival.to_string()),
            _ => None,
        }
    }
}
