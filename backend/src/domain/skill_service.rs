//! Skill catalogue service implementing the [`SkillCatalogue`] driving port.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{SkillCatalogue, SkillRepository, SkillRepositoryError};
use crate::domain::{Error, NewSkill, Skill, SkillId};

/// Maintains the shared skill catalogue.
#[derive(Clone)]
pub struct SkillService<S> {
    skills: Arc<S>,
}

impl<S> SkillService<S> {
    /// Create a new service over the skill repository.
    pub fn new(skills: Arc<S>) -> Self {
        Self { skills }
    }
}

pub(crate) fn map_skill_error(error: SkillRepositoryError) -> Error {
    match error {
        SkillRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("skill repository unavailable: {message}"))
        }
        SkillRepositoryError::Query { message } => {
            Error::internal(format!("skill repository error: {message}"))
        }
        SkillRepositoryError::Duplicate { key } => key.conflict(),
    }
}

pub(crate) fn skill_not_found() -> Error {
    Error::not_found("Skill not found")
}

#[async_trait]
impl<S> SkillCatalogue for SkillService<S>
where
    S: SkillRepository,
{
    async fn create(&self, name: String) -> Result<Skill, Error> {
        let skill = NewSkill::new(name)?;
        let stored = self.skills.insert(&skill).await.map_err(map_skill_error)?;
        tracing::info!(skill_id = %stored.id, "skill created");
        Ok(stored)
    }

    async fn get(&self, id: SkillId) -> Result<Skill, Error> {
        self.skills
            .find_by_id(id)
            .await
            .map_err(map_skill_error)?
            .ok_or_else(skill_not_found)
    }

    async fn list(&self) -> Result<Vec<Skill>, Error> {
        self.skills.list().await.map_err(map_skill_error)
    }

    async fn delete(&self, id: SkillId) -> Result<Skill, Error> {
        self.skills
            .delete(id)
            .await
            .map_err(map_skill_error)?
            .ok_or_else(skill_not_found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{MockSkillRepository, UniqueKey};

    #[tokio::test]
    async fn create_trims_name_before_storing() {
        let mut repo = MockSkillRepository::new();
        repo.expect_insert()
            .withf(|skill| skill.name == "Rust")
            .times(1)
            .returning(|skill| {
                Ok(Skill {
                    id: SkillId::new(1),
                    name: skill.name.clone(),
                })
            });

        let skill = SkillService::new(Arc::new(repo))
            .create("  Rust ".into())
            .await
            .expect("create");
        assert_eq!(skill.name, "Rust");
    }

    #[tokio::test]
    async fn duplicate_name_is_conflict() {
        let mut repo = MockSkillRepository::new();
        repo.expect_insert()
            .return_once(|_| Err(SkillRepositoryError::duplicate(UniqueKey::SkillName)));

        let error = SkillService::new(Arc::new(repo))
            .create("Rust".into())
            .await
            .expect_err("duplicate");
        assert_eq!(error.code(), ErrorCode::Conflict);
        assert_eq!(error.message(), "Skill already exists");
    }

    #[tokio::test]
    async fn delete_of_missing_skill_is_not_found() {
        let mut repo = MockSkillRepository::new();
        repo.expect_delete().return_once(|_| Ok(None));

        let error = SkillService::new(Arc::new(repo))
            .delete(SkillId::new(2))
            .await
            .expect_err("missing");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }
}
