//! Registration Use Case
//!
//! Validates a submitted registration form and creates the account.
//!
//! Every rule is evaluated independently and all violations are collected in
//! rule order, so the form can show the user everything that is wrong at
//! once. Nothing is persisted unless the whole form is clean.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use platform::password::{ClearTextPassword, PasswordPolicyError};
use serde::Deserialize;

use crate::application::config::AccountsConfig;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    availability::{AvailabilityError, AvailabilityWindow},
    birth_date::{BirthDate, BirthDateError},
    email::{Email, EmailError},
    person_name::{PersonName, PersonNameError},
};
use crate::error::{AccountError, AccountResult, NameField, RegistrationIssue};

/// Registration form fields, one per submitted input.
///
/// Serde renames match the web form's field names on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterInput {
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub alias: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "pwd_confirm")]
    pub password_confirm: String,
    #[serde(rename = "dob")]
    pub birth_date: String,
    pub start_time: String,
    pub end_time: String,
}

/// Registration use case
pub struct RegisterUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AccountsConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AccountsConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AccountResult<Account> {
        let today = Utc::now().date_naive();
        self.execute_at(input, today).await
    }

    /// Validation against an explicit `today`, so age boundaries are testable.
    async fn execute_at(&self, input: RegisterInput, today: NaiveDate) -> AccountResult<Account> {
        let mut issues = Vec::new();

        // Rule 1: the five name-bearing fields share one rule
        for (field, value) in [
            (NameField::DisplayName, &input.name),
            (NameField::FirstName, &input.first_name),
            (NameField::LastName, &input.last_name),
            (NameField::Username, &input.username),
            (NameField::Alias, &input.alias),
        ] {
            for issue in PersonName::validate(value) {
                issues.push(match issue {
                    PersonNameError::TooShort { min, .. } => {
                        RegistrationIssue::NameTooShort { field, min }
                    }
                    PersonNameError::InvalidCharacter { .. } => {
                        RegistrationIssue::NameInvalidCharacters { field }
                    }
                });
            }
        }

        // Rule 2: email shape, then uniqueness.
        // The pre-check is advisory UX; the store's unique index decides.
        for issue in Email::validate(&input.email) {
            issues.push(match issue {
                EmailError::TooShort { min, .. } => RegistrationIssue::EmailTooShort { min },
                EmailError::TooLong { max, .. } => RegistrationIssue::EmailTooLong { max },
                EmailError::InvalidFormat => RegistrationIssue::EmailInvalid,
            });
        }
        if let Ok(email) = Email::new(input.email.as_str()) {
            if self.repo.exists_by_email(&email).await? {
                issues.push(RegistrationIssue::EmailTaken);
            }
        }

        // Rule 3: password policy and confirmation.
        // The confirmation compares the raw submissions exactly, before any
        // normalization.
        let password = match ClearTextPassword::new(input.password.clone()) {
            Ok(password) => Some(password),
            Err(policy) => {
                issues.push(match policy {
                    PasswordPolicyError::TooShort { min, .. } => {
                        RegistrationIssue::PasswordTooShort { min }
                    }
                    PasswordPolicyError::TooLong { max, .. } => {
                        RegistrationIssue::PasswordTooLong { max }
                    }
                    PasswordPolicyError::EmptyOrWhitespace => RegistrationIssue::PasswordEmpty,
                });
                None
            }
        };
        if input.password != input.password_confirm {
            issues.push(RegistrationIssue::PasswordMismatch);
        }

        // Rule 4: date of birth
        for issue in BirthDate::validate(&input.birth_date, today) {
            issues.push(match issue {
                BirthDateError::Missing => RegistrationIssue::BirthDateMissing,
                BirthDateError::Unparseable => RegistrationIssue::BirthDateInvalid,
                BirthDateError::NotInPast => RegistrationIssue::BirthDateNotPast,
                BirthDateError::UnderMinimumAge { min_years } => {
                    RegistrationIssue::UnderMinimumAge { min_years }
                }
            });
        }

        // Rule 5: availability window
        for issue in AvailabilityWindow::validate(&input.start_time, &input.end_time) {
            issues.push(match issue {
                AvailabilityError::InvalidStart => RegistrationIssue::StartTimeInvalid,
                AvailabilityError::InvalidEnd => RegistrationIssue::EndTimeInvalid,
                AvailabilityError::Inverted { .. } => RegistrationIssue::WindowInverted,
            });
        }

        if !issues.is_empty() {
            return Err(AccountError::Rejected(issues));
        }

        // The form is clean; build the validated record
        let display_name = PersonName::new(input.name.as_str())
            .map_err(|e| AccountError::Internal(e.to_string()))?;
        let first_name = PersonName::new(input.first_name.as_str())
            .map_err(|e| AccountError::Internal(e.to_string()))?;
        let last_name = PersonName::new(input.last_name.as_str())
            .map_err(|e| AccountError::Internal(e.to_string()))?;
        let username = PersonName::new(input.username.as_str())
            .map_err(|e| AccountError::Internal(e.to_string()))?;
        let alias = PersonName::new(input.alias.as_str())
            .map_err(|e| AccountError::Internal(e.to_string()))?;
        let email = Email::new(input.email.as_str())
            .map_err(|e| AccountError::Internal(e.to_string()))?;
        let birth_date = BirthDate::parse(&input.birth_date, today)
            .map_err(|e| AccountError::Internal(e.to_string()))?;
        let availability = AvailabilityWindow::parse(&input.start_time, &input.end_time)
            .map_err(|e| AccountError::Internal(e.to_string()))?;
        let Some(password) = password else {
            // A policy failure was recorded above, so this is unreachable
            return Err(AccountError::Internal("password state out of sync".into()));
        };

        let password_hash = password.hash(self.config.pepper())?;

        let account = Account::new(
            display_name,
            first_name,
            last_name,
            username,
            alias,
            email,
            birth_date,
            availability,
            password_hash,
        );

        if let Err(err) = self.repo.create(&account).await {
            if matches!(err, AccountError::DuplicateEmail) {
                tracing::warn!(
                    email = %account.email,
                    "Registration lost a duplicate-email race"
                );
            }
            return Err(err);
        }

        tracing::info!(
            account_id = %account.account_id,
            username = %account.username,
            "Account registered"
        );

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryAccountRepository;

    fn valid_input() -> RegisterInput {
        RegisterInput {
            name: "Morgan Reed".to_string(),
            first_name: "Morgan".to_string(),
            last_name: "Reed".to_string(),
            username: "morganreed".to_string(),
            alias: "momo".to_string(),
            email: "morgan@example.com".to_string(),
            password: "CorrectHorse9".to_string(),
            password_confirm: "CorrectHorse9".to_string(),
            birth_date: "1991-04-02".to_string(),
            start_time: "09:00".to_string(),
            end_time: "17:00".to_string(),
        }
    }

    fn use_case() -> (RegisterUseCase<InMemoryAccountRepository>, Arc<InMemoryAccountRepository>) {
        let repo = Arc::new(InMemoryAccountRepository::new());
        let use_case = RegisterUseCase::new(repo.clone(), Arc::new(AccountsConfig::default()));
        (use_case, repo)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    fn messages(err: &AccountError) -> Vec<String> {
        err.user_messages()
    }

    #[tokio::test]
    async fn test_successful_registration() {
        let (use_case, repo) = use_case();
        let account = use_case.execute(valid_input()).await.unwrap();

        assert_eq!(account.email.as_str(), "morgan@example.com");
        assert_eq!(account.username.as_str(), "morganreed");
        assert_eq!(account.created_at, account.updated_at);

        // Stored, and the stored hash verifies the submitted password
        let stored = repo
            .find_by_email(&Email::new("morgan@example.com").unwrap())
            .await
            .unwrap()
            .unwrap();
        let password = ClearTextPassword::new("CorrectHorse9".to_string()).unwrap();
        assert!(stored.password_hash.verify(&password, None));
        assert_ne!(stored.password_hash.as_phc_string(), "CorrectHorse9");
    }

    #[tokio::test]
    async fn test_single_violation_blocks_creation() {
        let cases = [
            RegisterInput {
                name: "Mo".to_string(),
                ..valid_input()
            },
            RegisterInput {
                email: "not-an-email".to_string(),
                ..valid_input()
            },
            RegisterInput {
                password: "short".to_string(),
                password_confirm: "short".to_string(),
                ..valid_input()
            },
            RegisterInput {
                birth_date: "2020-01-01".to_string(),
                ..valid_input()
            },
            RegisterInput {
                start_time: "18:00".to_string(),
                end_time: "08:00".to_string(),
                ..valid_input()
            },
        ];

        for input in cases {
            let (use_case, repo) = use_case();
            let err = use_case.execute(input).await.unwrap_err();
            assert!(matches!(err, AccountError::Rejected(_)));
            assert_eq!(repo.len(), 0, "nothing may be created: {err:?}");
        }
    }

    #[tokio::test]
    async fn test_violations_collected_in_rule_order() {
        let (use_case, _repo) = use_case();
        let input = RegisterInput {
            name: "Mo".to_string(),
            email: "bad".to_string(),
            password: "short".to_string(),
            password_confirm: "different".to_string(),
            birth_date: "2020-01-01".to_string(),
            start_time: "".to_string(),
            ..valid_input()
        };

        let err = use_case.execute(input).await.unwrap_err();
        assert_eq!(
            messages(&err),
            vec![
                "Name must be at least 3 characters long",
                "Email is not a valid address",
                "Password must be at least 8 characters long",
                "Passwords do not match",
                "You must be at least 13 years old",
                "Please enter a valid start time",
            ]
        );
    }

    #[tokio::test]
    async fn test_short_name_with_bad_character_reports_both() {
        let (use_case, _repo) = use_case();
        let input = RegisterInput {
            alias: "m!".to_string(),
            ..valid_input()
        };

        let err = use_case.execute(input).await.unwrap_err();
        assert_eq!(
            messages(&err),
            vec![
                "Alias must be at least 3 characters long",
                "Alias may only contain letters and spaces",
            ]
        );
    }

    #[tokio::test]
    async fn test_mismatched_confirmation_blocks_valid_password() {
        let (use_case, repo) = use_case();
        let input = RegisterInput {
            password_confirm: "CorrectHorse8".to_string(),
            ..valid_input()
        };

        let err = use_case.execute(input).await.unwrap_err();
        assert_eq!(messages(&err), vec!["Passwords do not match"]);
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_email_on_second_attempt() {
        let (use_case, repo) = use_case();
        use_case.execute(valid_input()).await.unwrap();

        let err = use_case
            .execute(RegisterInput {
                username: "otherperson".to_string(),
                ..valid_input()
            })
            .await
            .unwrap_err();

        assert_eq!(messages(&err), vec!["This email is already in use"]);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_creates_exactly_one_account() {
        let (use_case, repo) = use_case();

        let (first, second) =
            tokio::join!(use_case.execute(valid_input()), use_case.execute(valid_input()));

        assert_eq!(
            first.is_ok() as usize + second.is_ok() as usize,
            1,
            "exactly one registration may win"
        );
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_minimum_age_boundary() {
        // Exactly 13 years old today: passes
        {
            let (use_case, _repo) = use_case();
            let input = RegisterInput {
                birth_date: "2013-08-07".to_string(),
                ..valid_input()
            };
            assert!(use_case.execute_at(input, today()).await.is_ok());
        }

        // One day short of 13: fails
        let (use_case, repo) = use_case();
        let input = RegisterInput {
            birth_date: "2013-08-08".to_string(),
            ..valid_input()
        };
        let err = use_case.execute_at(input, today()).await.unwrap_err();
        assert_eq!(messages(&err), vec!["You must be at least 13 years old"]);
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_malformed_birth_date_is_not_an_age_error() {
        let (use_case, _repo) = use_case();
        let input = RegisterInput {
            birth_date: "02/04/1991".to_string(),
            ..valid_input()
        };
        let err = use_case.execute(input).await.unwrap_err();
        assert_eq!(messages(&err), vec!["Please enter a valid date"]);
    }

    #[tokio::test]
    async fn test_missing_birth_date() {
        let (use_case, _repo) = use_case();
        let input = RegisterInput {
            birth_date: String::new(),
            ..valid_input()
        };
        let err = use_case.execute(input).await.unwrap_err();
        assert_eq!(messages(&err), vec!["Date of birth is a required field"]);
    }

    #[tokio::test]
    async fn test_equal_window_times_rejected() {
        let (use_case, _repo) = use_case();
        let input = RegisterInput {
            start_time: "09:00".to_string(),
            end_time: "09:00".to_string(),
            ..valid_input()
        };
        let err = use_case.execute(input).await.unwrap_err();
        assert_eq!(messages(&err), vec!["Start time must be before end time"]);
    }

    #[test]
    fn test_input_deserializes_from_form_keys() {
        let input: RegisterInput = serde_json::from_str(
            r#"{
                "name": "Morgan Reed",
                "first_name": "Morgan",
                "last_name": "Reed",
                "username": "morganreed",
                "alias": "momo",
                "email": "morgan@example.com",
                "password": "CorrectHorse9",
                "pwd_confirm": "CorrectHorse9",
                "dob": "1991-04-02",
                "start_time": "09:00",
                "end_time": "17:00"
            }"#,
        )
        .unwrap();
        assert_eq!(input.password_confirm, "CorrectHorse9");
        assert_eq!(input.birth_date, "1991-04-02");
    }
}
