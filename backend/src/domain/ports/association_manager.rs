//! Driving port for user skills, posting skills, and applications.
//!
//! Every mutation checks that both sides exist before touching the relation;
//! a missing side is `not_found`, a repeated pair is `conflict`.

use async_trait::async_trait;

use crate::domain::{
    AdminId, Error, JobPosting, JobPostingId, JobPostingWithApplicants, Skill, SkillId, User,
    UserId,
};

/// Use-cases over the many-to-many relations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssociationManager: Send + Sync {
    /// Give a user a skill.
    async fn add_user_skill(&self, user_id: UserId, skill_id: SkillId) -> Result<(), Error>;

    /// Take a skill away from a user.
    async fn remove_user_skill(&self, user_id: UserId, skill_id: SkillId) -> Result<(), Error>;

    /// Skills held by a user.
    async fn list_user_skills(&self, user_id: UserId) -> Result<Vec<Skill>, Error>;

    /// Require a skill for a posting.
    async fn add_job_skill(&self, job_id: JobPostingId, skill_id: SkillId) -> Result<(), Error>;

    /// Stop requiring a skill for a posting.
    async fn remove_job_skill(&self, job_id: JobPostingId, skill_id: SkillId)
    -> Result<(), Error>;

    /// Drop every required skill of a posting; returns how many were dropped.
    async fn clear_job_skills(&self, job_id: JobPostingId) -> Result<usize, Error>;

    /// Skills required by a posting.
    async fn list_job_skills(&self, job_id: JobPostingId) -> Result<Vec<Skill>, Error>;

    /// Record that a user applied to a posting.
    async fn apply(&self, job_id: JobPostingId, user_id: UserId) -> Result<(), Error>;

    /// Postings a user applied to.
    async fn list_user_applications(&self, user_id: UserId) -> Result<Vec<JobPosting>, Error>;

    /// Users who applied to a posting.
    async fn list_job_applicants(&self, job_id: JobPostingId) -> Result<Vec<User>, Error>;

    /// Every posting of an admin's companies with its applicants.
    async fn list_jobs_with_applicants(
        &self,
        admin_id: AdminId,
    ) -> Result<Vec<JobPostingWithApplicants>, Error>;
}
