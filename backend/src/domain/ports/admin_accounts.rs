//! Driving port for administrator account management.

use async_trait::async_trait;

use crate::domain::{Admin, AdminDraft, AdminId, AdminPatch, Error};

/// Use-cases over admin accounts consumed by inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminAccounts: Send + Sync {
    /// Validate, hash the password, and store a new admin.
    async fn register(&self, draft: AdminDraft) -> Result<Admin, Error>;

    /// Fetch one admin or fail with `not_found`.
    async fn get(&self, id: AdminId) -> Result<Admin, Error>;

    /// Fetch the admin registered under `email`.
    async fn get_by_email(&self, email: &str) -> Result<Admin, Error>;

    /// List every admin.
    async fn list(&self) -> Result<Vec<Admin>, Error>;

    /// Apply a partial update.
    async fn update(&self, id: AdminId, patch: AdminPatch) -> Result<Admin, Error>;

    /// Delete an admin; refused while it still owns companies.
    async fn delete(&self, id: AdminId) -> Result<Admin, Error>;
}
