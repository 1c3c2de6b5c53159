//! Port abstraction for the three many-to-many relations.
//!
//! Each relation holds at most one row per pair. Adapters enforce that with a
//! uniqueness constraint and report the violation as
//! [`AssociationRepositoryError::Duplicate`], so callers never need a
//! separate duplicate pre-check.

use async_trait::async_trait;

use crate::domain::{JobPosting, JobPostingId, Skill, SkillId, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by association repository adapters.
    pub enum AssociationRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "association repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "association repository query failed: {message}",
        /// The pair is already present in the relation.
        Duplicate => "association already exists",
        /// One side of the pair no longer exists.
        MissingReference { message: String } => "association references a missing row: {message}",
    }
}

/// Store of user skills, posting skills, and applications.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssociationRepository: Send + Sync {
    /// Insert a (user, skill) pair.
    async fn add_user_skill(
        &self,
        user_id: UserId,
        skill_id: SkillId,
    ) -> Result<(), AssociationRepositoryError>;

    /// Delete a (user, skill) pair; `false` when the pair was absent.
    async fn remove_user_skill(
        &self,
        user_id: UserId,
        skill_id: SkillId,
    ) -> Result<bool, AssociationRepositoryError>;

    /// Skills held by a user ordered by id.
    async fn list_user_skills(&self, user_id: UserId)
    -> Result<Vec<Skill>, AssociationRepositoryError>;

    /// Insert a (posting, skill) pair.
    async fn add_job_skill(
        &self,
        job_id: JobPostingId,
        skill_id: SkillId,
    ) -> Result<(), AssociationRepositoryError>;

    /// Delete a (posting, skill) pair; `false` when the pair was absent.
    async fn remove_job_skill(
        &self,
        job_id: JobPostingId,
        skill_id: SkillId,
    ) -> Result<bool, AssociationRepositoryError>;

    /// Delete every skill of a posting and return how many were removed.
    async fn clear_job_skills(
        &self,
        job_id: JobPostingId,
    ) -> Result<usize, AssociationRepositoryError>;

    /// Skills required by a posting ordered by id.
    async fn list_job_skills(
        &self,
        job_id: JobPostingId,
    ) -> Result<Vec<Skill>, AssociationRepositoryError>;

    /// Insert a (user, posting) application.
    async fn add_application(
        &self,
        user_id: UserId,
        job_id: JobPostingId,
    ) -> Result<(), AssociationRepositoryError>;

    /// Postings a user applied to ordered by id.
    async fn list_user_applications(
        &self,
        user_id: UserId,
    ) -> Result<Vec<JobPosting>, AssociationRepositoryError>;

    /// Users who applied to a posting ordered by id.
    async fn list_job_applicants(
        &self,
        job_id: JobPostingId,
    ) -> Result<Vec<User>, AssociationRepositoryError>;
}
