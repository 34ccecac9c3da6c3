//! Row validation
//!
//! Validation semantics:
//! - All five schema fields must be present and non-empty after trimming
//! - departure/arrival must parse as schedule datetimes
//! - Every defect in a row is collected; checking never short-circuits
//! - String fields carry no format constraint beyond non-emptiness
//! - arrival is not required to follow departure
//!
//! The validator does not mutate rows; a successful validation yields a new
//! `Flight` with trimmed fields.

use crate::model::{Flight, ScheduleTime};

use super::row::RawRow;

/// Validates raw rows against the flight schema.
pub struct RowValidator;

impl RowValidator {
    /// Validates a single row.
    ///
    /// # Errors
    ///
    /// Returns every failure reason for the row, in field-check order:
    /// `missing field: <name>` for an absent or empty column,
    /// `invalid datetime: <field>=<value>` for an unparseable datetime.
    pub fn validate(row: &RawRow) -> Result<Flight, Vec<String>> {
        let mut reasons = Vec::new();

        let flight_number = Self::required_text(row, "flight_number", &mut reasons);
        let origin = Self::required_text(row, "origin", &mut reasons);
        let destination = Self::required_text(row, "destination", &mut reasons);
        let departure = Self::required_time(row, "departure", &mut reasons);
        let arrival = Self::required_time(row, "arrival", &mut reasons);

        match (flight_number, origin, destination, departure, arrival) {
            (Some(flight_number), Some(origin), Some(destination), Some(departure), Some(arrival))
                if reasons.is_empty() =>
            {
                Ok(Flight {
                    flight_number,
                    origin,
                    destination,
                    departure,
                    arrival,
                })
            }
            _ => Err(reasons),
        }
    }

    fn required_text(row: &RawRow, name: &str, reasons: &mut Vec<String>) -> Option<String> {
        match row.get(name).map(str::trim) {
            None | Some("") => {
                reasons.push(format!("missing field: {}", name));
                None
            }
            Some(value) => Some(value.to_string()),
        }
    }

    fn required_time(row: &RawRow, name: &str, reasons: &mut Vec<String>) -> Option<ScheduleTime> {
        let value = match row.get(name).map(str::trim) {
            None | Some("") => {
                reasons.push(format!("missing field: {}", name));
                return None;
            }
            Some(value) => value,
        };

        match ScheduleTime::parse(value) {
            Ok(time) => Some(time),
            Err(_) => {
                reasons.push(format!("invalid datetime: {}={}", name, value));
                None
            }
        }
    }
}
