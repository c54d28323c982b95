//! Person Name Value Object
//!
//! Shared rule for the name-bearing registration fields (display name, first
//! name, last name, username, alias): ASCII letters and spaces only, at least
//! three characters. The value is stored exactly as submitted.
//!
//! ## Invariants
//! - Length: at least [`NAME_MIN_LENGTH`] characters
//! - Characters: `A-Z`, `a-z`, and space

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Minimum length for a name field (in characters)
pub const NAME_MIN_LENGTH: usize = 3;

/// Error returned when name validation fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersonNameError {
    /// Name is too short (minimum: NAME_MIN_LENGTH)
    #[error("name is too short ({length} chars, minimum {min})")]
    TooShort { length: usize, min: usize },

    /// Name contains a character outside letters and spaces
    #[error("invalid character {char:?} at position {position}; only letters and spaces are allowed")]
    InvalidCharacter { char: char, position: usize },
}

/// Validated name field value
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonName(String);

impl PersonName {
    /// Create a new PersonName, returning the first rule violation.
    pub fn new(input: impl Into<String>) -> Result<Self, PersonNameError> {
        let value = input.into();
        match Self::validate(&value).into_iter().next() {
            Some(issue) => Err(issue),
            None => Ok(Self(value)),
        }
    }

    /// Every rule violation for `input`, in rule order.
    ///
    /// The length and character-set checks are independent: a short value
    /// containing a bad character reports both.
    pub fn validate(input: &str) -> Vec<PersonNameError> {
        let mut issues = Vec::new();

        let length = input.chars().count();
        if length < NAME_MIN_LENGTH {
            issues.push(PersonNameError::TooShort {
                length,
                min: NAME_MIN_LENGTH,
            });
        }

        if let Some((position, char)) = input
            .chars()
            .enumerate()
            .find(|(_, c)| !Self::is_allowed(*c))
        {
            issues.push(PersonNameError::InvalidCharacter { char, position });
        }

        issues
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String
    pub fn into_inner(self) -> String {
        self.0
    }

    #[inline]
    fn is_allowed(c: char) -> bool {
        c.is_ascii_alphabetic() || c == ' '
    }
}

impl fmt::Debug for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PersonName").field(&self.0).finish()
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PersonName {
    type Error = PersonNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PersonName {
    type Error = PersonNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PersonName> for String {
    fn from(name: PersonName) -> Self {
        name.0
    }
}
