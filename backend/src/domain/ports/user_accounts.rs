//! Driving port for candidate account management.

use async_trait::async_trait;

use crate::domain::{Error, User, UserDraft, UserId, UserPatch};

/// Use-cases over user accounts consumed by inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserAccounts: Send + Sync {
    /// Validate, hash the password, and store a new user.
    async fn register(&self, draft: UserDraft) -> Result<User, Error>;

    /// Fetch one user or fail with `not_found`.
    async fn get(&self, id: UserId) -> Result<User, Error>;

    /// Fetch the user registered under `email`.
    async fn get_by_email(&self, email: &str) -> Result<User, Error>;

    /// List every user.
    async fn list(&self) -> Result<Vec<User>, Error>;

    /// Apply a partial update.
    async fn update(&self, id: UserId, patch: UserPatch) -> Result<User, Error>;

    /// Delete a user together with their experiences, skills, and applications.
    async fn delete(&self, id: UserId) -> Result<User, Error>;
}
