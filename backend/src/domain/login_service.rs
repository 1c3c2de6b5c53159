//! Credential login implementing the [`LoginService`] driving port.
//!
//! Admins are checked first, then users. Emails are unique per collection
//! only, so an admin and a user may share one; the password decides which
//! account signs in. Unknown emails and wrong passwords both yield
//! `unauthorized` with the same message.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    AccessTokenError, AccessTokens, AdminRepository, IssuedToken, LoginService, PasswordHasher,
    UserRepository,
};
use crate::domain::{Error, LoginCredentials, PasswordHash, Principal};

use super::admin_service::map_admin_error;
use super::service_support::map_hasher_error;
use super::user_service::map_user_error;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Exchanges email and password for a signed access token.
#[derive(Clone)]
pub struct CredentialLoginService<A, U, H, T> {
    admins: Arc<A>,
    users: Arc<U>,
    hasher: Arc<H>,
    tokens: Arc<T>,
}

impl<A, U, H, T> CredentialLoginService<A, U, H, T> {
    /// Create a new login service.
    pub fn new(admins: Arc<A>, users: Arc<U>, hasher: Arc<H>, tokens: Arc<T>) -> Self {
        Self {
            admins,
            users,
            hasher,
            tokens,
        }
    }
}

fn map_token_error(error: AccessTokenError) -> Error {
    Error::internal(format!("token issuance failed: {error}"))
}

impl<A, U, H, T> CredentialLoginService<A, U, H, T>
where
    A: AdminRepository,
    U: UserRepository,
    H: PasswordHasher,
    T: AccessTokens,
{
    /// Accounts registered under `email`, admin first.
    async fn candidates(&self, email: &str) -> Result<Vec<(Principal, PasswordHash)>, Error> {
        let mut accounts = Vec::with_capacity(2);
        if let Some(admin) = self
            .admins
            .find_by_email(email)
            .await
            .map_err(map_admin_error)?
        {
            accounts.push((Principal::admin(admin.email, admin.id), admin.password_hash));
        }
        if let Some(user) = self
            .users
            .find_by_email(email)
            .await
            .map_err(map_user_error)?
        {
            accounts.push((Principal::user(user.email, user.id), user.password_hash));
        }
        Ok(accounts)
    }
}

#[async_trait]
impl<A, U, H, T> LoginService for CredentialLoginService<A, U, H, T>
where
    A: AdminRepository,
    U: UserRepository,
    H: PasswordHasher,
    T: AccessTokens,
{
    async fn login(&self, credentials: &LoginCredentials) -> Result<IssuedToken, Error> {
        let accounts = self.candidates(credentials.email()).await?;
        if accounts.is_empty() {
            tracing::debug!("login rejected: unknown email");
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        }
        for (principal, hash) in accounts {
            let verified = self
                .hasher
                .verify(credentials.password(), &hash)
                .await
                .map_err(map_hasher_error)?;
            if verified {
                return self
                    .tokens
                    .issue(&principal)
                    .await
                    .map_err(map_token_error);
            }
        }
        tracing::debug!("login rejected: wrong password");
        Err(Error::unauthorized(INVALID_CREDENTIALS))
    }
}
