//! Account Error Types
//!
//! Every validation outcome is a normal return value; nothing in this crate
//! panics on bad input. Registration failures carry the full ordered list of
//! violations, login failures carry exactly one category.

use thiserror::Error;

/// Account-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// Which name-bearing registration field an issue refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    DisplayName,
    FirstName,
    LastName,
    Username,
    Alias,
}

impl NameField {
    /// Form label used in user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::DisplayName => "Name",
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Username => "Username",
            Self::Alias => "Alias",
        }
    }
}

/// One registration rule violation.
///
/// The `Display` text is the exact message shown to the user, so the variants
/// double as the rendering vocabulary of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistrationIssue {
    #[error("{} must be at least {} characters long", .field.label(), .min)]
    NameTooShort { field: NameField, min: usize },

    #[error("{} may only contain letters and spaces", .field.label())]
    NameInvalidCharacters { field: NameField },

    #[error("Email must be at least {} characters long", .min)]
    EmailTooShort { min: usize },

    #[error("Email must be at most {} characters long", .max)]
    EmailTooLong { max: usize },

    #[error("Email is not a valid address")]
    EmailInvalid,

    #[error("This email is already in use")]
    EmailTaken,

    #[error("Password must be at least {} characters long", .min)]
    PasswordTooShort { min: usize },

    #[error("Password must be at most {} characters long", .max)]
    PasswordTooLong { max: usize },

    #[error("Password cannot be empty")]
    PasswordEmpty,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Date of birth is a required field")]
    BirthDateMissing,

    #[error("Please enter a valid date")]
    BirthDateInvalid,

    #[error("Date of birth must be in the past")]
    BirthDateNotPast,

    #[error("You must be at least {} years old", .min_years)]
    UnderMinimumAge { min_years: u32 },

    #[error("Please enter a valid start time")]
    StartTimeInvalid,

    #[error("Please enter a valid end time")]
    EndTimeInvalid,

    #[error("Start time must be before end time")]
    WindowInverted,
}

/// Account-specific error variants
#[derive(Debug, Error)]
pub enum AccountError {
    /// Registration input failed validation; all violations, in rule order.
    #[error("registration rejected with {} issue(s)", .0.len())]
    Rejected(Vec<RegistrationIssue>),

    /// The unique email index rejected the write (a registration lost the
    /// race after passing the advisory pre-check).
    #[error("This email is already in use")]
    DuplicateEmail,

    /// No account matches the submitted email.
    #[error("email does not exist - please register")]
    EmailNotFound,

    /// Password verification failed for an existing account.
    #[error("email/password incorrect")]
    InvalidCredentials,

    /// Credential hashing failed.
    #[error("credential hashing failed: {0}")]
    Hashing(#[from] platform::password::PasswordHashError),

    /// Database error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AccountError {
    /// User-facing messages for the rendering layer.
    ///
    /// Registration rejections expand to one message per violation, in rule
    /// order. Store and internal failures collapse to a single generic line
    /// so no backend detail leaks to the user.
    pub fn user_messages(&self) -> Vec<String> {
        match self {
            Self::Rejected(issues) => issues.iter().map(|issue| issue.to_string()).collect(),
            Self::DuplicateEmail | Self::EmailNotFound | Self::InvalidCredentials => {
                vec![self.to_string()]
            }
            Self::Hashing(_) | Self::Database(_) | Self::Internal(_) => {
                vec!["Something went wrong - please try again".to_string()]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_messages() {
        assert_eq!(
            RegistrationIssue::NameTooShort {
                field: NameField::FirstName,
                min: 3
            }
            .to_string(),
            "First name must be at least 3 characters long"
        );
        assert_eq!(
            RegistrationIssue::NameInvalidCharacters {
                field: NameField::Alias
            }
            .to_string(),
            "Alias may only contain letters and spaces"
        );
        assert_eq!(
            RegistrationIssue::UnderMinimumAge { min_years: 13 }.to_string(),
            "You must be at least 13 years old"
        );
    }

    #[test]
    fn test_login_messages() {
        assert_eq!(
            AccountError::EmailNotFound.to_string(),
            "email does not exist - please register"
        );
        assert_eq!(
            AccountError::InvalidCredentials.to_string(),
            "email/password incorrect"
        );
    }

    #[test]
    fn test_user_messages_preserve_order() {
        let err = AccountError::Rejected(vec![
            RegistrationIssue::NameTooShort {
                field: NameField::DisplayName,
                min: 3,
            },
            RegistrationIssue::EmailInvalid,
            RegistrationIssue::PasswordMismatch,
        ]);
        assert_eq!(
            err.user_messages(),
            vec![
                "Name must be at least 3 characters long",
                "Email is not a valid address",
                "Passwords do not match",
            ]
        );
    }

    #[test]
    fn test_user_messages_hide_store_detail() {
        let err = AccountError::Internal("lock poisoned".to_string());
        let messages = err.user_messages();
        assert_eq!(messages.len(), 1);
        assert!(!messages[0].contains("lock"));
    }
}
