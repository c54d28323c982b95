//! Accounts Backend Module
//!
//! User registration and login validation, backed by a relational account
//! store.
//!
//! Clean Architecture structure:
//! - `domain/` - entities, value objects, repository trait
//! - `application/` - use cases (register, login) and configuration
//! - `infra/` - store implementations (PostgreSQL, in-memory)
//!
//! ## Validation model
//! Registration evaluates every rule and collects all violations in rule
//! order; login short-circuits at the first failing category. Either way the
//! outcome is an ordinary `Result`, and `AccountError::user_messages` renders
//! the user-facing text for whatever surface sits on top. Routing, sessions,
//! and templating live outside this crate.
//!
//! ## Security model
//! - Passwords hashed with Argon2id via the `platform` crate, optional pepper
//! - Email uniqueness enforced by the store's unique index at write time;
//!   the application-level pre-check only improves form messages
//! - Date and time fields compared as calendar/time values, never as text

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::config::AccountsConfig;
pub use application::login::{LoginInput, LoginUseCase};
pub use application::register::{RegisterInput, RegisterUseCase};
pub use domain::entity::account::Account;
pub use domain::repository::AccountRepository;
pub use error::{AccountError, AccountResult, NameField, RegistrationIssue};
pub use infra::memory::InMemoryAccountRepository;
pub use infra::postgres::PgAccountRepository;
