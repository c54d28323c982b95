//! In-Memory Repository Implementation
//!
//! Test and development double for the PostgreSQL store. The map insert is
//! the arbiter for email uniqueness, exactly like the unique index: the
//! second writer loses regardless of what any earlier pre-check reported.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AccountError, AccountResult};

/// In-memory account repository, keyed by stored email
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored accounts
    pub fn len(&self) -> usize {
        self.accounts.read().map(|map| map.len()).unwrap_or(0)
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: &Account) -> AccountResult<()> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| AccountError::Internal("account store lock poisoned".to_string()))?;

        if accounts.contains_key(account.email.as_str()) {
            return Err(AccountError::DuplicateEmail);
        }

        accounts.insert(account.email.as_str().to_string(), account.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<Account>> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| AccountError::Internal("account store lock poisoned".to_string()))?;

        Ok(accounts.get(email.as_str()).cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AccountResult<bool> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| AccountError::Internal("account store lock poisoned".to_string()))?;

        Ok(accounts.contains_key(email.as_str()))
    }
}
