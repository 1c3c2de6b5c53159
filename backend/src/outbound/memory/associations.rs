//! Join-table behaviour: one row per pair, dangling ids rejected.

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::domain::ports::{AssociationRepository, AssociationRepositoryError};
use crate::domain::{JobPosting, JobPostingId, Skill, SkillId, User, UserId};

use super::{InMemoryStore, Tables};

fn insert_pair<A: Ord, B: Ord>(
    relation: &mut BTreeSet<(A, B)>,
    pair: (A, B),
) -> Result<(), AssociationRepositoryError> {
    if relation.insert(pair) {
        Ok(())
    } else {
        Err(AssociationRepositoryError::duplicate())
    }
}

impl Tables {
    fn require_user(&self, id: UserId) -> Result<(), AssociationRepositoryError> {
        if self.users.contains_key(&id) {
            Ok(())
        } else {
            Err(AssociationRepositoryError::missing_reference(format!(
                "user {id}"
            )))
        }
    }

    fn require_skill(&self, id: SkillId) -> Result<(), AssociationRepositoryError> {
        if self.skills.contains_key(&id) {
            Ok(())
        } else {
            Err(AssociationRepositoryError::missing_reference(format!(
                "skill {id}"
            )))
        }
    }

    fn require_job(&self, id: JobPostingId) -> Result<(), AssociationRepositoryError> {
        if self.job_postings.contains_key(&id) {
            Ok(())
        } else {
            Err(AssociationRepositoryError::missing_reference(format!(
                "job posting {id}"
            )))
        }
    }
}

#[async_trait]
impl AssociationRepository for InMemoryStore {
    async fn add_user_skill(
        &self,
        user_id: UserId,
        skill_id: SkillId,
    ) -> Result<(), AssociationRepositoryError> {
        let mut tables = self.lock();
        tables.require_user(user_id)?;
        tables.require_skill(skill_id)?;
        insert_pair(&mut tables.user_skills, (user_id, skill_id))
    }

    async fn remove_user_skill(
        &self,
        user_id: UserId,
        skill_id: SkillId,
    ) -> Result<bool, AssociationRepositoryError> {
        Ok(self.lock().user_skills.remove(&(user_id, skill_id)))
    }

    async fn list_user_skills(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Skill>, AssociationRepositoryError> {
        let tables = self.lock();
        Ok(tables
            .skills
            .values()
            .filter(|skill| tables.user_skills.contains(&(user_id, skill.id)))
            .cloned()
            .collect())
    }

    async fn add_job_skill(
        &self,
        job_id: JobPostingId,
        skill_id: SkillId,
    ) -> Result<(), AssociationRepositoryError> {
        let mut tables = self.lock();
        tables.require_job(job_id)?;
        tables.require_skill(skill_id)?;
        insert_pair(&mut tables.job_posting_skills, (job_id, skill_id))
    }

    async fn remove_job_skill(
        &self,
        job_id: JobPostingId,
        skill_id: SkillId,
    ) -> Result<bool, AssociationRepositoryError> {
        Ok(self.lock().job_posting_skills.remove(&(job_id, skill_id)))
    }

    async fn clear_job_skills(
        &self,
        job_id: JobPostingId,
    ) -> Result<usize, AssociationRepositoryError> {
        let mut tables = self.lock();
        let before = tables.job_posting_skills.len();
        tables.job_posting_skills.retain(|(id, _)| *id != job_id);
        Ok(before - tables.job_posting_skills.len())
    }

    async fn list_job_skills(
        &self,
        job_id: JobPostingId,
    ) -> Result<Vec<Skill>, AssociationRepositoryError> {
        let tables = self.lock();
        Ok(tables
            .skills
            .values()
            .filter(|skill| tables.job_posting_skills.contains(&(job_id, skill.id)))
            .cloned()
            .collect())
    }

    async fn add_application(
        &self,
        user_id: UserId,
        job_id: JobPostingId,
    ) -> Result<(), AssociationRepositoryError> {
        let mut tables = self.lock();
        tables.require_user(user_id)?;
        tables.require_job(job_id)?;
        insert_pair(&mut tables.applications, (user_id, job_id))
    }

    async fn list_user_applications(
        &self,
        user_id: UserId,
    ) -> Result<Vec<JobPosting>, AssociationRepositoryError> {
        let tables = self.lock();
        Ok(tables
            .job_postings
            .values()
            .filter(|job| tables.applications.contains(&(user_id, job.id)))
            .cloned()
            .collect())
    }

    async fn list_job_applicants(
        &self,
        job_id: JobPostingId,
    ) -> Result<Vec<User>, AssociationRepositoryError> {
        let tables = self.lock();
        Ok(tables
            .users
            .values()
            .filter(|user| tables.applications.contains(&(user.id, job_id)))
            .cloned()
            .collect())
    }
}
