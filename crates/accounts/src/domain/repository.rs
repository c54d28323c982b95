//! Repository Traits
//!
//! Interface for account persistence. Implementations are in the
//! infrastructure layer.

use crate::domain::entity::account::Account;
use crate::domain::value_object::email::Email;
use crate::error::AccountResult;

/// Account store boundary
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Persist a new account.
    ///
    /// Email uniqueness is enforced here, atomically at write time: an email
    /// collision fails with `AccountError::DuplicateEmail` no matter what any
    /// earlier `exists_by_email` call reported.
    async fn create(&self, account: &Account) -> AccountResult<()>;

    /// Find an account by exact email match (case-sensitive).
    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<Account>>;

    /// Advisory uniqueness pre-check for friendly form messages.
    ///
    /// Two requests can both see `false` here and still race on `create`;
    /// only the write decides.
    async fn exists_by_email(&self, email: &Email) -> AccountResult<bool>;
}
