//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations for the account backend:
//! - Password hashing (Argon2id, NIST SP 800-63B compliant)
//!
//! Domain crates wrap these primitives with their own vocabulary; nothing in
//! here knows about accounts, forms, or validation messages.

pub mod password;
