//! Port abstraction for job posting persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{
    AdminId, CompanyId, JobPosting, JobPostingChanges, JobPostingId, NewJobPosting,
};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by job posting repository adapters.
    pub enum JobPostingRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "job posting repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "job posting repository query failed: {message}",
        /// The referenced owning company does not exist.
        MissingCompany { company_id: CompanyId } => "company {company_id} does not exist",
    }
}

/// Store of job postings.
///
/// Deleting a posting removes its skill associations and applications.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobPostingRepository: Send + Sync {
    /// Persist a new posting and return it with its assigned id.
    async fn insert(&self, posting: &NewJobPosting)
    -> Result<JobPosting, JobPostingRepositoryError>;

    /// Fetch a posting by identifier.
    async fn find_by_id(
        &self,
        id: JobPostingId,
    ) -> Result<Option<JobPosting>, JobPostingRepositoryError>;

    /// List all postings ordered by id.
    async fn list(&self) -> Result<Vec<JobPosting>, JobPostingRepositoryError>;

    /// List postings of one company ordered by id.
    async fn list_by_company(
        &self,
        company_id: CompanyId,
    ) -> Result<Vec<JobPosting>, JobPostingRepositoryError>;

    /// List postings of every company owned by `admin_id`, ordered by id.
    async fn list_by_admin(
        &self,
        admin_id: AdminId,
    ) -> Result<Vec<JobPosting>, JobPostingRepositoryError>;

    /// Apply `changes`; `None` when the posting does not exist.
    async fn update(
        &self,
        id: JobPostingId,
        changes: &JobPostingChanges,
    ) -> Result<Option<JobPosting>, JobPostingRepositoryError>;

    /// Remove the posting and return it; `None` when it does not exist.
    async fn delete(
        &self,
        id: JobPostingId,
    ) -> Result<Option<JobPosting>, JobPostingRepositoryError>;
}
