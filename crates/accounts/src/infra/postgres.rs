//! PostgreSQL Repository Implementation

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use platform::password::HashedPassword;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_id::AccountId, availability::AvailabilityWindow, birth_date::BirthDate, email::Email,
    person_name::PersonName,
};
use crate::error::{AccountError, AccountResult};

/// PostgreSQL-backed account repository
///
/// Email uniqueness is enforced by the unique index on `accounts.email`
/// (see `database/migrations/`); the insert maps that violation to
/// `AccountError::DuplicateEmail`, which closes the race that a
/// check-then-insert sequence leaves open.
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AccountRepository for PgAccountRepository {
    async fn create(&self, account: &Account) -> AccountResult<()> {
        sqlx::query(
            r#"
            INSERT INTO accounts (
                account_id,
                display_name,
                first_name,
                last_name,
                username,
                alias,
                email,
                birth_date,
                start_time,
                end_time,
                password_hash,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.display_name.as_str())
        .bind(account.first_name.as_str())
        .bind(account.last_name.as_str())
        .bind(account.username.as_str())
        .bind(account.alias.as_str())
        .bind(account.email.as_str())
        .bind(account.birth_date.as_date())
        .bind(account.availability.start())
        .bind(account.availability.end())
        .bind(account.password_hash.as_phc_string())
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                account_id,
                display_name,
                first_name,
                last_name,
                username,
                alias,
                email,
                birth_date,
                start_time,
                end_time,
                password_hash,
                created_at,
                updated_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> AccountResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM accounts WHERE email = $1)",
        )
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

/// A unique-index rejection is a lost registration race, not a database fault
fn map_unique_violation(err: sqlx::Error) -> AccountError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return AccountError::DuplicateEmail;
        }
    }
    AccountError::Database(err)
}

// ============================================================================
// Row Mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    account_id: Uuid,
    display_name: String,
    first_name: String,
    last_name: String,
    username: String,
    alias: String,
    email: String,
    birth_date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> AccountResult<Account> {
        let password_hash = HashedPassword::from_phc_string(self.password_hash).map_err(|e| {
            AccountError::Internal(format!("stored password hash is not a valid PHC string: {e}"))
        })?;

        Ok(Account {
            account_id: AccountId::from_uuid(self.account_id),
            display_name: PersonName::from_db(self.display_name),
            first_name: PersonName::from_db(self.first_name),
            last_name: PersonName::from_db(self.last_name),
            username: PersonName::from_db(self.username),
            alias: PersonName::from_db(self.alias),
            email: Email::from_db(self.email),
            birth_date: BirthDate::from_db(self.birth_date),
            availability: AvailabilityWindow::from_db(self.start_time, self.end_time),
            password_hash,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
