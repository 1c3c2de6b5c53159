//! Driving port for exchanging credentials for an access token.
//!
//! HTTP handler tests substitute a double for this port instead of wiring
//! hashing and persistence.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials};

use super::IssuedToken;

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Verify credentials and issue a token for the matching account.
    ///
    /// Unknown emails and wrong passwords fail alike with `unauthorized`.
    async fn login(&self, credentials: &LoginCredentials) -> Result<IssuedToken, Error>;
}
