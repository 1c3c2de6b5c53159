//! Port abstraction for company persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{AdminId, Company, CompanyChanges, CompanyId, NewCompany};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by company repository adapters.
    pub enum CompanyRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "company repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "company repository query failed: {message}",
        /// The referenced owning admin does not exist.
        MissingAdmin { admin_id: AdminId } => "admin {admin_id} does not exist",
        /// The company still owns job postings and cannot be removed.
        StillReferenced { message: String } => "company is still referenced: {message}",
    }
}

/// Store of companies.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Persist a new company and return it with its assigned id.
    async fn insert(&self, company: &NewCompany) -> Result<Company, CompanyRepositoryError>;

    /// Fetch a company by identifier.
    async fn find_by_id(&self, id: CompanyId) -> Result<Option<Company>, CompanyRepositoryError>;

    /// List all companies ordered by id.
    async fn list(&self) -> Result<Vec<Company>, CompanyRepositoryError>;

    /// List companies owned by `admin_id` ordered by id.
    async fn list_by_admin(&self, admin_id: AdminId)
    -> Result<Vec<Company>, CompanyRepositoryError>;

    /// Apply `changes`; `None` when the company does not exist.
    async fn update(
        &self,
        id: CompanyId,
        changes: &CompanyChanges,
    ) -> Result<Option<Company>, CompanyRepositoryError>;

    /// Remove the company and return it; `None` when it does not exist.
    async fn delete(&self, id: CompanyId) -> Result<Option<Company>, CompanyRepositoryError>;
}
