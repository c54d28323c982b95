//! Login Use Case
//!
//! Authenticates a submitted email/password pair against the account store.
//!
//! The lookup happens first; nothing is hashed or compared for an email with
//! no account behind it. Failures short-circuit at the first category and
//! carry exactly one user-facing message.

use std::sync::Arc;

use platform::password::ClearTextPassword;
use serde::Deserialize;

use crate::application::config::AccountsConfig;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AccountError, AccountResult};

/// Login form fields
#[derive(Debug, Clone, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AccountsConfig>,
}

impl<R> LoginUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AccountsConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AccountResult<Account> {
        // An address that cannot exist in the store is reported the same way
        // as one that simply is not there
        let Ok(email) = Email::new(input.email.as_str()) else {
            tracing::warn!("Login attempt with malformed email");
            return Err(AccountError::EmailNotFound);
        };

        let Some(account) = self.repo.find_by_email(&email).await? else {
            tracing::warn!("Login attempt for unknown email");
            return Err(AccountError::EmailNotFound);
        };

        // A submission that fails the password policy cannot match any stored
        // hash; registration enforced the same policy
        let Ok(password) = ClearTextPassword::new(input.password) else {
            tracing::warn!(account_id = %account.account_id, "Login rejected");
            return Err(AccountError::InvalidCredentials);
        };

        if !account
            .password_hash
            .verify(&password, self.config.pepper())
        {
            tracing::warn!(account_id = %account.account_id, "Login rejected");
            return Err(AccountError::InvalidCredentials);
        }

        tracing::info!(account_id = %account.account_id, "Login succeeded");

        Ok(account)
    }
}
