//! Account Entity
//!
//! One registered user, as persisted in the account store. The password is
//! only ever held as an Argon2id PHC hash; cleartext never reaches this type.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;

use crate::domain::value_object::{
    account_id::AccountId, availability::AvailabilityWindow, birth_date::BirthDate, email::Email,
    person_name::PersonName,
};

/// Account entity
#[derive(Debug, Clone)]
pub struct Account {
    /// Internal UUID identifier
    pub account_id: AccountId,
    /// Display name ("name" form field)
    pub display_name: PersonName,
    /// First name
    pub first_name: PersonName,
    /// Last name
    pub last_name: PersonName,
    /// Username
    pub username: PersonName,
    /// Alias
    pub alias: PersonName,
    /// Email (unique across accounts, stored exactly as submitted)
    pub email: Email,
    /// Date of birth (account holder was at least 13 at creation)
    pub birth_date: BirthDate,
    /// Daily availability window
    pub availability: AvailabilityWindow,
    /// Hashed password (PHC string)
    pub password_hash: HashedPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp (equals `created_at`; no update path exists here)
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with both timestamps set to now.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        display_name: PersonName,
        first_name: PersonName,
        last_name: PersonName,
        username: PersonName,
        alias: PersonName,
        email: Email,
        birth_date: BirthDate,
        availability: AvailabilityWindow,
        password_hash: HashedPassword,
    ) -> Self {
        let now = Utc::now();

        Self {
            account_id: AccountId::new(),
            display_name,
            first_name,
            last_name,
            username,
            alias,
            email,
            birth_date,
            availability,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}
