//! bcrypt-backed [`PasswordHasher`].
//!
//! bcrypt is deliberately slow, so both operations run on the blocking
//! thread pool.

use async_trait::async_trait;
use zeroize::Zeroizing;

use crate::domain::ports::{PasswordHasher, PasswordHasherError};
use crate::domain::{Password, PasswordHash};

/// Hashes passwords with bcrypt at a fixed work factor.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher using `cost` rounds (4..=31).
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

fn backend_error(error: impl std::fmt::Display) -> PasswordHasherError {
    PasswordHasherError::backend(error.to_string())
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError> {
        let plaintext = Zeroizing::new(password.expose().to_owned());
        let cost = self.cost;
        let encoded = tokio::task::spawn_blocking(move || bcrypt::hash(plaintext.as_str(), cost))
            .await
            .map_err(backend_error)?
            .map_err(backend_error)?;
        Ok(PasswordHash::new(encoded))
    }

    async fn verify(
        &self,
        password: &Password,
        hash: &PasswordHash,
    ) -> Result<bool, PasswordHasherError> {
        let plaintext = Zeroizing::new(password.expose().to_owned());
        let encoded = hash.as_str().to_owned();
        tokio::task::spawn_blocking(move || bcrypt::verify(plaintext.as_str(), &encoded))
            .await
            .map_err(backend_error)?
            .map_err(backend_error)
    }
}
