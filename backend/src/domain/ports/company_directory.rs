//! Driving port for company management.

use async_trait::async_trait;

use crate::domain::{AdminId, Company, CompanyDraft, CompanyId, CompanyPatch, Error};

/// Use-cases over companies consumed by inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyDirectory: Send + Sync {
    /// Create a company owned by an existing admin.
    async fn create(&self, draft: CompanyDraft) -> Result<Company, Error>;

    /// Fetch one company or fail with `not_found`.
    async fn get(&self, id: CompanyId) -> Result<Company, Error>;

    /// List every company.
    async fn list(&self) -> Result<Vec<Company>, Error>;

    /// List the companies owned by an existing admin.
    async fn list_by_admin(&self, admin_id: AdminId) -> Result<Vec<Company>, Error>;

    /// Apply a partial update.
    async fn update(&self, id: CompanyId, patch: CompanyPatch) -> Result<Company, Error>;

    /// Delete a company; refused while it still has job postings.
    async fn delete(&self, id: CompanyId) -> Result<Company, Error>;
}
