//! Schedule timestamps
//!
//! Accepted input forms:
//! - RFC 3339 with explicit UTC offset, e.g. `2025-01-01T10:00:00+02:00`
//! - ISO-8601 without offset, e.g. `2025-01-01T10:00:00` or `2025-01-01T10:00`
//! - The relaxed form `2025-01-01 10:00` (seconds optional)
//!
//! The offset-or-not distinction is preserved through serialization: an
//! offset is never invented for an input that did not carry one.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Offset-free formats accepted by `ScheduleTime::parse`, tried in order.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Error returned when a string is not a recognized schedule datetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeParseError {
    input: String,
}

impl TimeParseError {
    fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The rejected input, as given.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for TimeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a valid schedule datetime: '{}'", self.input)
    }
}

impl std::error::Error for TimeParseError {}

/// A flight schedule timestamp.
///
/// Inputs may carry a UTC offset or not, and a record must round-trip through
/// the DB without gaining or losing one, so both shapes are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleTime {
    /// Offset-free input. Rendered as `YYYY-MM-DDTHH:MM:SS`.
    Naive(NaiveDateTime),
    /// Input with an explicit UTC offset. Rendered as RFC 3339.
    Zoned(DateTime<FixedOffset>),
}

impl ScheduleTime {
    /// Parses a schedule timestamp, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `TimeParseError` if the input is empty or matches none of the
    /// accepted forms.
    pub fn parse(input: &str) -> Result<Self, TimeParseError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(TimeParseError::new(input));
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self::Zoned(dt));
        }

        for format in NAIVE_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(Self::Naive(dt));
            }
        }

        Err(TimeParseError::new(s))
    }

    /// Comparison key for range predicates.
    ///
    /// Zoned values collapse to their UTC instant; naive values are taken as
    /// already UTC. This keeps the ordering total and deterministic when a
    /// dataset mixes both shapes.
    pub fn instant(&self) -> NaiveDateTime {
        match self {
            Self::Naive(dt) => *dt,
            Self::Zoned(dt) => dt.naive_utc(),
        }
    }

    /// Whether the input carried an explicit UTC offset.
    pub fn has_offset(&self) -> bool {
        matches!(self, Self::Zoned(_))
    }
}

impl fmt::Display for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Naive(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
            Self::Zoned(dt) => write!(f, "{}", dt.to_rfc3339()),
        }
    }
}

impl FromStr for ScheduleTime {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ScheduleTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ScheduleTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
