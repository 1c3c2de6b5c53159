//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{PasswordHash, User, UserChanges, UserId, UserProfile};

use super::{UniqueKey, define_port_error};

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// Another user already holds the unique value.
        Duplicate { key: UniqueKey } => "user {key} already registered",
    }
}

/// Store of candidate accounts.
///
/// Deleting a user removes its experience entries, skill associations, and
/// applications in the same statement.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user and return it with its assigned id.
    async fn insert(
        &self,
        profile: &UserProfile,
        password_hash: &PasswordHash,
    ) -> Result<User, UserRepositoryError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Fetch a user by normalised email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError>;

    /// List all users ordered by id.
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Apply `changes`; `None` when the user does not exist.
    async fn update(
        &self,
        id: UserId,
        changes: &UserChanges,
    ) -> Result<Option<User>, UserRepositoryError>;

    /// Remove the user and everything it owns; `None` when it does not exist.
    async fn delete(&self, id: UserId) -> Result<Option<User>, UserRepositoryError>;
}
