//! Application Configuration
//!
//! Configuration for the accounts application layer.

/// Accounts application configuration
#[derive(Debug, Clone, Default)]
pub struct AccountsConfig {
    /// Password pepper (optional, application-wide secret)
    ///
    /// Must stay stable for the lifetime of the stored hashes: verification
    /// uses the same pepper that hashing did.
    pub password_pepper: Option<Vec<u8>>,
}

impl AccountsConfig {
    /// Create a config with a pepper
    pub fn with_pepper(pepper: impl Into<Vec<u8>>) -> Self {
        Self {
            password_pepper: Some(pepper.into()),
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
