//! Birth Date Value Object
//!
//! Date of birth in `YYYY-MM-DD` form. All comparisons are calendar
//! comparisons on parsed dates, never on the raw text: the age boundary is
//! "has the 13th birthday happened yet", which text ordering cannot express
//! across month/day boundaries and leap days.

use chrono::NaiveDate;
use thiserror::Error;

/// Accepted input format
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Minimum account-holder age, in whole years
pub const MINIMUM_AGE_YEARS: u32 = 13;

/// Error returned when birth date validation fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BirthDateError {
    /// No input submitted
    #[error("date of birth is required")]
    Missing,

    /// Input is not a valid `YYYY-MM-DD` calendar date
    #[error("date of birth is not a valid calendar date")]
    Unparseable,

    /// Date is today or later
    #[error("date of birth must be in the past")]
    NotInPast,

    /// The minimum-age birthday has not happened yet
    #[error("account holder must be at least {min_years} years old")]
    UnderMinimumAge { min_years: u32 },
}

/// Validated date of birth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Parse and validate against `today`, returning the first rule violation.
    pub fn parse(input: &str, today: NaiveDate) -> Result<Self, BirthDateError> {
        if let Some(issue) = Self::validate(input, today).into_iter().next() {
            return Err(issue);
        }
        let date = NaiveDate::parse_from_str(input, BIRTH_DATE_FORMAT)
            .map_err(|_| BirthDateError::Unparseable)?;
        Ok(Self(date))
    }

    /// Every rule violation for `input` against `today`, in rule order.
    ///
    /// A missing or malformed date reports only that fact; the semantic
    /// checks (in the past, old enough) run only on a parsed date and are
    /// independent of each other.
    pub fn validate(input: &str, today: NaiveDate) -> Vec<BirthDateError> {
        if input.is_empty() {
            return vec![BirthDateError::Missing];
        }
        let Ok(date) = NaiveDate::parse_from_str(input, BIRTH_DATE_FORMAT) else {
            return vec![BirthDateError::Unparseable];
        };

        let mut issues = Vec::new();
        if date >= today {
            issues.push(BirthDateError::NotInPast);
        }
        // years_since is None when the date is in the future
        match today.years_since(date) {
            Some(age) if age >= MINIMUM_AGE_YEARS => {}
            _ => issues.push(BirthDateError::UnderMinimumAge {
                min_years: MINIMUM_AGE_YEARS,
            }),
        }
        issues
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Get the underlying calendar date
    pub fn as_date(&self) -> NaiveDate {
        self.0
    }
}
