//! Association service implementing the [`AssociationManager`] driving port.
//!
//! Both sides of a pair are resolved first so a dangling id reports which
//! entity is missing. Duplicate pairs are left to the store's uniqueness
//! constraint and surface as conflicts.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::ports::{
    AdminRepository, AssociationManager, AssociationRepository, AssociationRepositoryError,
    JobPostingRepository, SkillRepository, UserRepository,
};
use crate::domain::{
    AdminId, Error, JobPosting, JobPostingId, JobPostingWithApplicants, Skill, SkillId, User,
    UserId,
};

use super::admin_service::{admin_not_found, map_admin_error};
use super::job_posting_service::{job_not_found, map_job_error};
use super::skill_service::{map_skill_error, skill_not_found};
use super::user_service::{map_user_error, user_not_found};

/// Maintains user skills, posting skills, and applications.
#[derive(Clone)]
pub struct AssociationService<R, U, J, S, A> {
    links: Arc<R>,
    users: Arc<U>,
    jobs: Arc<J>,
    skills: Arc<S>,
    admins: Arc<A>,
}

impl<R, U, J, S, A> AssociationService<R, U, J, S, A> {
    /// Create a new service over the relation store and the entity stores it
    /// resolves ids against.
    pub fn new(
        links: Arc<R>,
        users: Arc<U>,
        jobs: Arc<J>,
        skills: Arc<S>,
        admins: Arc<A>,
    ) -> Self {
        Self {
            links,
            users,
            jobs,
            skills,
            admins,
        }
    }
}

/// Which relation an operation touched, for conflict wording.
#[derive(Debug, Clone, Copy)]
enum Relation {
    UserSkill,
    JobSkill,
    Application,
}

impl Relation {
    fn duplicate(self) -> Error {
        let message = match self {
            Self::UserSkill => "User already has this skill",
            Self::JobSkill => "Job posting already requires this skill",
            Self::Application => "User already applied to this job posting",
        };
        Error::conflict(message).with_details(json!({ "code": "duplicate_association" }))
    }

    fn absent(self) -> Error {
        let message = match self {
            Self::UserSkill => "User does not have this skill",
            Self::JobSkill => "Job posting does not require this skill",
            Self::Application => "User has not applied to this job posting",
        };
        Error::conflict(message).with_details(json!({ "code": "not_associated" }))
    }
}

fn map_link_error(relation: Relation) -> impl Fn(AssociationRepositoryError) -> Error {
    move |error| match error {
        AssociationRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("association repository unavailable: {message}"))
        }
        AssociationRepositoryError::Query { message } => {
            Error::internal(format!("association repository error: {message}"))
        }
        AssociationRepositoryError::Duplicate => relation.duplicate(),
        AssociationRepositoryError::MissingReference { message } => {
            Error::not_found(format!("Associated record not found: {message}"))
        }
    }
}

impl<R, U, J, S, A> AssociationService<R, U, J, S, A>
where
    R: AssociationRepository,
    U: UserRepository,
    J: JobPostingRepository,
    S: SkillRepository,
    A: AdminRepository,
{
    async fn ensure_user(&self, id: UserId) -> Result<(), Error> {
        self.users
            .find_by_id(id)
            .await
            .map_err(map_user_error)?
            .map(|_| ())
            .ok_or_else(user_not_found)
    }

    async fn ensure_job(&self, id: JobPostingId) -> Result<(), Error> {
        self.jobs
            .find_by_id(id)
            .await
            .map_err(map_job_error)?
            .map(|_| ())
            .ok_or_else(job_not_found)
    }

    async fn ensure_skill(&self, id: SkillId) -> Result<(), Error> {
        self.skills
            .find_by_id(id)
            .await
            .map_err(map_skill_error)?
            .map(|_| ())
            .ok_or_else(skill_not_found)
    }
}

#[async_trait]
impl<R, U, J, S, A> AssociationManager for AssociationService<R, U, J, S, A>
where
    R: AssociationRepository,
    U: UserRepository,
    J: JobPostingRepository,
    S: SkillRepository,
    A: AdminRepository,
{
    async fn add_user_skill(&self, user_id: UserId, skill_id: SkillId) -> Result<(), Error> {
        self.ensure_user(user_id).await?;
        self.ensure_skill(skill_id).await?;
        self.links
            .add_user_skill(user_id, skill_id)
            .await
            .map_err(map_link_error(Relation::UserSkill))
    }

    async fn remove_user_skill(&self, user_id: UserId, skill_id: SkillId) -> Result<(), Error> {
        self.ensure_user(user_id).await?;
        self.ensure_skill(skill_id).await?;
        let removed = self
            .links
            .remove_user_skill(user_id, skill_id)
            .await
            .map_err(map_link_error(Relation::UserSkill))?;
        if removed {
            Ok(())
        } else {
            Err(Relation::UserSkill.absent())
        }
    }

    async fn list_user_skills(&self, user_id: UserId) -> Result<Vec<Skill>, Error> {
        self.ensure_user(user_id).await?;
        self.links
            .list_user_skills(user_id)
            .await
            .map_err(map_link_error(Relation::UserSkill))
    }

    async fn add_job_skill(&self, job_id: JobPostingId, skill_id: SkillId) -> Result<(), Error> {
        self.ensure_job(job_id).await?;
        self.ensure_skill(skill_id).await?;
        self.links
            .add_job_skill(job_id, skill_id)
            .await
            .map_err(map_link_error(Relation::JobSkill))
    }

    async fn remove_job_skill(
        &self,
        job_id: JobPostingId,
        skill_id: SkillId,
    ) -> Result<(), Error> {
        self.ensure_job(job_id).await?;
        self.ensure_skill(skill_id).await?;
        let removed = self
            .links
            .remove_job_skill(job_id, skill_id)
            .await
            .map_err(map_link_error(Relation::JobSkill))?;
        if removed {
            Ok(())
        } else {
            Err(Relation::JobSkill.absent())
        }
    }

    async fn clear_job_skills(&self, job_id: JobPostingId) -> Result<usize, Error> {
        self.ensure_job(job_id).await?;
        self.links
            .clear_job_skills(job_id)
            .await
            .map_err(map_link_error(Relation::JobSkill))
    }

    async fn list_job_skills(&self, job_id: JobPostingId) -> Result<Vec<Skill>, Error> {
        self.ensure_job(job_id).await?;
        self.links
            .list_job_skills(job_id)
            .await
            .map_err(map_link_error(Relation::JobSkill))
    }

    async fn apply(&self, job_id: JobPostingId, user_id: UserId) -> Result<(), Error> {
        self.ensure_job(job_id).await?;
        self.ensure_user(user_id).await?;
        self.links
            .add_application(user_id, job_id)
            .await
            .map_err(map_link_error(Relation::Application))?;
        tracing::info!(%job_id, %user_id, "application recorded");
        Ok(())
    }

    async fn list_user_applications(&self, user_id: UserId) -> Result<Vec<JobPosting>, Error> {
        self.ensure_user(user_id).await?;
        self.links
            .list_user_applications(user_id)
            .await
            .map_err(map_link_error(Relation::Application))
    }

    async fn list_job_applicants(&self, job_id: JobPostingId) -> Result<Vec<User>, Error> {
        self.ensure_job(job_id).await?;
        self.links
            .list_job_applicants(job_id)
            .await
            .map_err(map_link_error(Relation::Application))
    }

    async fn list_jobs_with_applicants(
        &self,
        admin_id: AdminId,
    ) -> Result<Vec<JobPostingWithApplicants>, Error> {
        self.admins
            .find_by_id(admin_id)
            .await
            .map_err(map_admin_error)?
            .ok_or_else(admin_not_found)?;
        let postings = self
            .jobs
            .list_by_admin(admin_id)
            .await
            .map_err(map_job_error)?;
        let mut detailed = Vec::with_capacity(postings.len());
        for posting in postings {
            let applicants = self
                .links
                .list_job_applicants(posting.id)
                .await
                .map_err(map_link_error(Relation::Application))?;
            detailed.push(JobPostingWithApplicants {
                posting,
                applicants,
            });
        }
        Ok(detailed)
    }
}

#[cfg(test)]
#[path = "association_service_tests.rs"]
mod tests;
