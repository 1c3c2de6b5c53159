//! Port for one-way password hashing.

use async_trait::async_trait;

use crate::domain::{Password, PasswordHash};

use super::define_port_error;

define_port_error! {
    /// Errors raised by password hashing adapters.
    pub enum PasswordHasherError {
        /// The hashing backend failed or rejected the stored hash.
        Backend { message: String } => "password hashing failed: {message}",
    }
}

/// Irreversible password hashing. Stored hashes are only ever compared.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password for storage.
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError>;

    /// Check a plaintext password against a stored hash.
    async fn verify(
        &self,
        password: &Password,
        hash: &PasswordHash,
    ) -> Result<bool, PasswordHasherError>;
}

/// Reversible stand-in for tests that exercise flows around hashing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePasswordHasher;

const FIXTURE_PREFIX: &str = "fixture$";

#[async_trait]
impl PasswordHasher for FixturePasswordHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError> {
        Ok(PasswordHash::new(format!(
            "{FIXTURE_PREFIX}{}",
            password.expose()
        )))
    }

    async fn verify(
        &self,
        password: &Password,
        hash: &PasswordHash,
    ) -> Result<bool, PasswordHasherError> {
        Ok(hash
            .as_str()
            .strip_prefix(FIXTURE_PREFIX)
            .is_some_and(|stored| stored == password.expose()))
    }
}
