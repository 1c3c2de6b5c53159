//! Company, job posting, skill, and experience repositories.

use async_trait::async_trait;

use crate::domain::ports::{
    CompanyRepository, CompanyRepositoryError, ExperienceRepository, ExperienceRepositoryError,
    JobPostingRepository, JobPostingRepositoryError, SkillRepository, SkillRepositoryError,
    UniqueKey,
};
use crate::domain::{
    AdminId, Company, CompanyChanges, CompanyId, Experience, ExperienceChanges, ExperienceId,
    JobPosting, JobPostingChanges, JobPostingId, NewCompany, NewExperience, NewJobPosting,
    NewSkill, Skill, SkillId, UserId,
};

use super::{InMemoryStore, next_id};

#[async_trait]
impl CompanyRepository for InMemoryStore {
    async fn insert(&self, company: &NewCompany) -> Result<Company, CompanyRepositoryError> {
        let mut tables = self.lock();
        if !tables.admins.contains_key(&company.admin_id) {
            return Err(CompanyRepositoryError::missing_admin(company.admin_id));
        }
        let id = CompanyId::new(next_id(&mut tables.sequences.companies));
        let stored = Company::from_new(id, company.clone());
        tables.companies.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: CompanyId) -> Result<Option<Company>, CompanyRepositoryError> {
        Ok(self.lock().companies.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Company>, CompanyRepositoryError> {
        Ok(self.lock().companies.values().cloned().collect())
    }

    async fn list_by_admin(
        &self,
        admin_id: AdminId,
    ) -> Result<Vec<Company>, CompanyRepositoryError> {
        Ok(self
            .lock()
            .companies
            .values()
            .filter(|company| company.admin_id == admin_id)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: CompanyId,
        changes: &CompanyChanges,
    ) -> Result<Option<Company>, CompanyRepositoryError> {
        let mut tables = self.lock();
        if !tables.companies.contains_key(&id) {
            return Ok(None);
        }
        if let Some(admin_id) = changes
            .admin_id
            .filter(|admin_id| !tables.admins.contains_key(admin_id))
        {
            return Err(CompanyRepositoryError::missing_admin(admin_id));
        }
        Ok(tables.companies.get_mut(&id).map(|company| {
            changes.apply_to(company);
            company.clone()
        }))
    }

    async fn delete(&self, id: CompanyId) -> Result<Option<Company>, CompanyRepositoryError> {
        let mut tables = self.lock();
        if tables.job_postings.values().any(|job| job.company_id == id) {
            return Err(CompanyRepositoryError::still_referenced("job_postings"));
        }
        Ok(tables.companies.remove(&id))
    }
}

#[async_trait]
impl JobPostingRepository for InMemoryStore {
    async fn insert(
        &self,
        posting: &NewJobPosting,
    ) -> Result<JobPosting, JobPostingRepositoryError> {
        let mut tables = self.lock();
        if !tables.companies.contains_key(&posting.company_id) {
            return Err(JobPostingRepositoryError::missing_company(
                posting.company_id,
            ));
        }
        let id = JobPostingId::new(next_id(&mut tables.sequences.job_postings));
        let stored = JobPosting::from_new(id, posting.clone());
        tables.job_postings.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(
        &self,
        id: JobPostingId,
    ) -> Result<Option<JobPosting>, JobPostingRepositoryError> {
        Ok(self.lock().job_postings.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<JobPosting>, JobPostingRepositoryError> {
        Ok(self.lock().job_postings.values().cloned().collect())
    }

    async fn list_by_company(
        &self,
        company_id: CompanyId,
    ) -> Result<Vec<JobPosting>, JobPostingRepositoryError> {
        Ok(self
            .lock()
            .job_postings
            .values()
            .filter(|job| job.company_id == company_id)
            .cloned()
            .collect())
    }

    async fn list_by_admin(
        &self,
        admin_id: AdminId,
    ) -> Result<Vec<JobPosting>, JobPostingRepositoryError> {
        let tables = self.lock();
        Ok(tables
            .job_postings
            .values()
            .filter(|job| {
                tables
                    .companies
                    .get(&job.company_id)
                    .is_some_and(|company| company.admin_id == admin_id)
            })
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: JobPostingId,
        changes: &JobPostingChanges,
    ) -> Result<Option<JobPosting>, JobPostingRepositoryError> {
        let mut tables = self.lock();
        if !tables.job_postings.contains_key(&id) {
            return Ok(None);
        }
        if let Some(company_id) = changes
            .company_id
            .filter(|company_id| !tables.companies.contains_key(company_id))
        {
            return Err(JobPostingRepositoryError::missing_company(company_id));
        }
        Ok(tables.job_postings.get_mut(&id).map(|job| {
            changes.apply_to(job);
            job.clone()
        }))
    }

    async fn delete(
        &self,
        id: JobPostingId,
    ) -> Result<Option<JobPosting>, JobPostingRepositoryError> {
        let mut tables = self.lock();
        let Some(job) = tables.job_postings.remove(&id) else {
            return Ok(None);
        };
        tables.job_posting_skills.retain(|(job_id, _)| *job_id != id);
        tables.applications.retain(|(_, job_id)| *job_id != id);
        Ok(Some(job))
    }
}

#[async_trait]
impl SkillRepository for InMemoryStore {
    async fn insert(&self, skill: &NewSkill) -> Result<Skill, SkillRepositoryError> {
        let mut tables = self.lock();
        if tables.skills.values().any(|s| s.name == skill.name) {
            return Err(SkillRepositoryError::duplicate(UniqueKey::SkillName));
        }
        let id = SkillId::new(next_id(&mut tables.sequences.skills));
        let stored = Skill {
            id,
            name: skill.name.clone(),
        };
        tables.skills.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: SkillId) -> Result<Option<Skill>, SkillRepositoryError> {
        Ok(self.lock().skills.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Skill>, SkillRepositoryError> {
        Ok(self.lock().skills.values().cloned().collect())
    }

    async fn delete(&self, id: SkillId) -> Result<Option<Skill>, SkillRepositoryError> {
        let mut tables = self.lock();
        let Some(skill) = tables.skills.remove(&id) else {
            return Ok(None);
        };
        tables.user_skills.retain(|(_, skill_id)| *skill_id != id);
        tables.job_posting_skills.retain(|(_, skill_id)| *skill_id != id);
        Ok(Some(skill))
    }
}

#[async_trait]
impl ExperienceRepository for InMemoryStore {
    async fn insert(
        &self,
        experience: &NewExperience,
    ) -> Result<Experience, ExperienceRepositoryError> {
        let mut tables = self.lock();
        if !tables.users.contains_key(&experience.user_id) {
            return Err(ExperienceRepositoryError::missing_user(experience.user_id));
        }
        let id = ExperienceId::new(next_id(&mut tables.sequences.experiences));
        let stored = Experience::from_new(id, experience.clone());
        tables.experiences.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(
        &self,
        id: ExperienceId,
    ) -> Result<Option<Experience>, ExperienceRepositoryError> {
        Ok(self.lock().experiences.get(&id).cloned())
    }

    async fn list_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Experience>, ExperienceRepositoryError> {
        Ok(self
            .lock()
            .experiences
            .values()
            .filter(|entry| entry.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: ExperienceId,
        changes: &ExperienceChanges,
    ) -> Result<Option<Experience>, ExperienceRepositoryError> {
        Ok(self.lock().experiences.get_mut(&id).map(|entry| {
            changes.apply_to(entry);
            entry.clone()
        }))
    }

    async fn delete(
        &self,
        id: ExperienceId,
    ) -> Result<Option<Experience>, ExperienceRepositoryError> {
        Ok(self.lock().experiences.remove(&id))
    }
}
