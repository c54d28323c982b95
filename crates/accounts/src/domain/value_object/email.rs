//! Email Value Object
//!
//! Represents a validated email address.
//! Basic shape validation only - actual verification would be done via email
//! confirmation, which is outside this crate.
//!
//! The address is stored exactly as submitted: lookups and the uniqueness
//! constraint are case-sensitive.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Minimum email length (shortest conceivable address shape)
pub const EMAIL_MIN_LENGTH: usize = 3;

/// Maximum email length (per RFC 5321)
pub const EMAIL_MAX_LENGTH: usize = 254;

/// Error returned when email validation fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    /// Email is too short
    #[error("email is too short ({length} chars, minimum {min})")]
    TooShort { length: usize, min: usize },

    /// Email is too long
    #[error("email is too long ({length} chars, maximum {max})")]
    TooLong { length: usize, max: usize },

    /// Email does not have a `local@domain.tld` shape
    #[error("email is not a valid address")]
    InvalidFormat,
}

/// Email address value object
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Create a new email, returning the first rule violation.
    pub fn new(input: impl Into<String>) -> Result<Self, EmailError> {
        let value = input.into();
        match Self::validate(&value).into_iter().next() {
            Some(issue) => Err(issue),
            None => Ok(Self(value)),
        }
    }

    /// Every rule violation for `input`, in rule order.
    ///
    /// Length and shape checks are independent; an empty input reports both.
    pub fn validate(input: &str) -> Vec<EmailError> {
        let mut issues = Vec::new();

        let length = input.chars().count();
        if length < EMAIL_MIN_LENGTH {
            issues.push(EmailError::TooShort {
                length,
                min: EMAIL_MIN_LENGTH,
            });
        }
        if length > EMAIL_MAX_LENGTH {
            issues.push(EmailError::TooLong {
                length,
                max: EMAIL_MAX_LENGTH,
            });
        }

        if !Self::is_valid_format(input) {
            issues.push(EmailError::InvalidFormat);
        }

        issues
    }

    /// Basic `local@domain.tld` shape validation
    fn is_valid_format(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        // Local part checks
        if local.is_empty() || local.len() > 64 {
            return false;
        }
        if !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '+' | '_' | '-'))
        {
            return false;
        }

        // Domain needs at least one dot and an alphabetic top-level label
        let Some((name, tld)) = domain.rsplit_once('.') else {
            return false;
        };
        if name.is_empty() || tld.is_empty() {
            return false;
        }
        if !tld.chars().all(|c| c.is_ascii_alphabetic()) {
            return false;
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        {
            return false;
        }
        if name.starts_with('.') || name.ends_with('.') || name.starts_with('-') {
            return false;
        }

        true
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to string for database storage
    pub fn into_db(self) -> String {
        self.0
    }
}

impl FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Email::new(s)
    }
}

impl fmt::Debug for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Email").field(&self.0).finish()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}
