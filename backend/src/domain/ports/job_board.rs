//! Driving port for job posting management.

use async_trait::async_trait;

use crate::domain::{
    AdminId, CompanyId, Error, JobPosting, JobPostingDraft, JobPostingId, JobPostingPatch,
};

/// Use-cases over job postings consumed by inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobBoard: Send + Sync {
    /// Publish a posting for an existing company.
    async fn create(&self, draft: JobPostingDraft) -> Result<JobPosting, Error>;

    /// Fetch one posting or fail with `not_found`.
    async fn get(&self, id: JobPostingId) -> Result<JobPosting, Error>;

    /// List every posting.
    async fn list(&self) -> Result<Vec<JobPosting>, Error>;

    /// List the postings of an existing company.
    async fn list_by_company(&self, company_id: CompanyId) -> Result<Vec<JobPosting>, Error>;

    /// List the postings across all companies of an existing admin.
    async fn list_by_admin(&self, admin_id: AdminId) -> Result<Vec<JobPosting>, Error>;

    /// Apply a partial update.
    async fn update(&self, id: JobPostingId, patch: JobPostingPatch)
    -> Result<JobPosting, Error>;

    /// Delete a posting with its skill links and applications.
    async fn delete(&self, id: JobPostingId) -> Result<JobPosting, Error>;
}
