//! Port for issuing and verifying bearer access tokens.
//!
//! Inbound adapters verify the `Authorization` header through this port and
//! receive a [`Principal`]; the login service issues tokens through it.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::Principal;

use super::define_port_error;

define_port_error! {
    /// Reasons a token could not be issued or accepted.
    pub enum AccessTokenError {
        /// Signature, encoding, or expiry check failed.
        Rejected { message: String } => "token rejected: {message}",
        /// The token decoded but lacks a required claim.
        MissingClaims => "token is missing required claims",
        /// Signing failed.
        Signing { message: String } => "token signing failed: {message}",
    }
}

/// A freshly signed token as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedToken {
    pub access_token: String,
    pub token_type: String,
    /// Lifetime in seconds.
    pub expires_in: i64,
}

impl IssuedToken {
    /// Wrap an encoded token as a bearer credential.
    pub fn bearer(access_token: impl Into<String>, expires_in: i64) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: "bearer".to_owned(),
            expires_in,
        }
    }
}

/// Signs principals into tokens and recovers them again.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccessTokens: Send + Sync {
    /// Sign a token for `principal`.
    async fn issue(&self, principal: &Principal) -> Result<IssuedToken, AccessTokenError>;

    /// Verify `token` and return the principal it names.
    async fn verify(&self, token: &str) -> Result<Principal, AccessTokenError>;
}
