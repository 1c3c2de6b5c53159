//! Port abstraction for admin persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Admin, AdminChanges, AdminId, AdminProfile, PasswordHash};

use super::{UniqueKey, define_port_error};

define_port_error! {
    /// Persistence errors raised by admin repository adapters.
    pub enum AdminRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "admin repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "admin repository query failed: {message}",
        /// Another admin already holds the unique value.
        Duplicate { key: UniqueKey } => "admin {key} already registered",
        /// The admin still owns companies and cannot be removed.
        StillReferenced { message: String } => "admin is still referenced: {message}",
    }
}

/// Store of administrator accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Persist a new admin and return it with its assigned id.
    async fn insert(
        &self,
        profile: &AdminProfile,
        password_hash: &PasswordHash,
    ) -> Result<Admin, AdminRepositoryError>;

    /// Fetch an admin by identifier.
    async fn find_by_id(&self, id: AdminId) -> Result<Option<Admin>, AdminRepositoryError>;

    /// Fetch an admin by normalised email.
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, AdminRepositoryError>;

    /// List all admins ordered by id.
    async fn list(&self) -> Result<Vec<Admin>, AdminRepositoryError>;

    /// Apply `changes`; `None` when the admin does not exist.
    async fn update(
        &self,
        id: AdminId,
        changes: &AdminChanges,
    ) -> Result<Option<Admin>, AdminRepositoryError>;

    /// Remove the admin and return it; `None` when it does not exist.
    async fn delete(&self, id: AdminId) -> Result<Option<Admin>, AdminRepositoryError>;
}
