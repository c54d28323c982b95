//! Availability Window Value Object
//!
//! Daily start/end time-of-day pair. Both ends are parsed into `NaiveTime`
//! before any comparison; the window is ordered by actual time of day, not by
//! text ordering of the submitted strings.
//!
//! ## Invariant
//! - Start time strictly precedes end time

use chrono::NaiveTime;
use thiserror::Error;

/// Accepted input formats, tried in order
pub const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M"];

/// Error returned when window validation fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AvailabilityError {
    /// Start input is missing or not a time of day
    #[error("start time is not a valid time of day")]
    InvalidStart,

    /// End input is missing or not a time of day
    #[error("end time is not a valid time of day")]
    InvalidEnd,

    /// Start does not strictly precede end
    #[error("start time {start} is not before end time {end}")]
    Inverted { start: NaiveTime, end: NaiveTime },
}

/// Validated daily availability window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl AvailabilityWindow {
    /// Create from parsed times, enforcing the ordering invariant.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, AvailabilityError> {
        if start >= end {
            return Err(AvailabilityError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parse and validate a submitted pair, returning the first violation.
    pub fn parse(start: &str, end: &str) -> Result<Self, AvailabilityError> {
        let start = parse_time_of_day(start).ok_or(AvailabilityError::InvalidStart)?;
        let end = parse_time_of_day(end).ok_or(AvailabilityError::InvalidEnd)?;
        Self::new(start, end)
    }

    /// Every rule violation for the submitted pair, in rule order.
    ///
    /// The ordering check only runs when both ends parse.
    pub fn validate(start: &str, end: &str) -> Vec<AvailabilityError> {
        let mut issues = Vec::new();
        let start_time = parse_time_of_day(start);
        let end_time = parse_time_of_day(end);

        if start_time.is_none() {
            issues.push(AvailabilityError::InvalidStart);
        }
        if end_time.is_none() {
            issues.push(AvailabilityError::InvalidEnd);
        }
        if let (Some(start), Some(end)) = (start_time, end_time) {
            if start >= end {
                issues.push(AvailabilityError::Inverted { start, end });
            }
        }
        issues
    }

    /// Create from database values (assumed already validated)
    pub fn from_db(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Window start, inclusive
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// Window end, exclusive
    pub fn end(&self) -> NaiveTime {
        self.end
    }
}

/// Accept `HH:MM:SS` or `HH:MM`.
pub fn parse_time_of_day(input: &str) -> Option<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(input, format).ok())
}
