//! Experience service implementing the [`ExperienceLog`] driving port.
//!
//! Entries are owned by a user. Changes to an existing entry are permitted
//! to that user or to any admin.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    ExperienceLog, ExperienceRepository, ExperienceRepositoryError, UserRepository,
};
use crate::domain::{
    Error, Experience, ExperienceDraft, ExperienceId, ExperiencePatch, NewExperience, Principal,
    UserId,
};

use super::user_service::{map_user_error, user_not_found};

/// Records and maintains users' work history.
#[derive(Clone)]
pub struct ExperienceService<E, U> {
    experiences: Arc<E>,
    users: Arc<U>,
}

impl<E, U> ExperienceService<E, U> {
    /// Create a new service over the experience and user repositories.
    pub fn new(experiences: Arc<E>, users: Arc<U>) -> Self {
        Self { experiences, users }
    }
}

fn map_experience_error(error: ExperienceRepositoryError) -> Error {
    match error {
        ExperienceRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("experience repository unavailable: {message}"))
        }
        ExperienceRepositoryError::Query { message } => {
            Error::internal(format!("experience repository error: {message}"))
        }
        ExperienceRepositoryError::MissingUser { .. } => user_not_found(),
    }
}

fn experience_not_found() -> Error {
    Error::not_found("Experience not found")
}

impl<E, U> ExperienceService<E, U>
where
    E: ExperienceRepository,
    U: UserRepository,
{
    async fn ensure_user(&self, user_id: UserId) -> Result<(), Error> {
        self.users
            .find_by_id(user_id)
            .await
            .map_err(map_user_error)?
            .map(|_| ())
            .ok_or_else(user_not_found)
    }

    async fn owned_by_actor(
        &self,
        actor: &Principal,
        id: ExperienceId,
    ) -> Result<Experience, Error> {
        let experience = self.get(id).await?;
        actor.require_user_or_admin(experience.user_id)?;
        Ok(experience)
    }
}

#[async_trait]
impl<E, U> ExperienceLog for ExperienceService<E, U>
where
    E: ExperienceRepository,
    U: UserRepository,
{
    async fn create(&self, draft: ExperienceDraft) -> Result<Experience, Error> {
        let experience = NewExperience::new(draft)?;
        self.ensure_user(experience.user_id).await?;
        self.experiences
            .insert(&experience)
            .await
            .map_err(map_experience_error)
    }

    async fn get(&self, id: ExperienceId) -> Result<Experience, Error> {
        self.experiences
            .find_by_id(id)
            .await
            .map_err(map_experience_error)?
            .ok_or_else(experience_not_found)
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Experience>, Error> {
        self.ensure_user(user_id).await?;
        self.experiences
            .list_by_user(user_id)
            .await
            .map_err(map_experience_error)
    }

    async fn update(
        &self,
        actor: &Principal,
        id: ExperienceId,
        patch: ExperiencePatch,
    ) -> Result<Experience, Error> {
        let current = self.owned_by_actor(actor, id).await?;
        let changes = patch.validate()?;
        if changes.is_empty() {
            return Ok(current);
        }
        self.experiences
            .update(id, &changes)
            .await
            .map_err(map_experience_error)?
            .ok_or_else(experience_not_found)
    }

    async fn delete(&self, actor: &Principal, id: ExperienceId) -> Result<Experience, Error> {
        self.owned_by_actor(actor, id).await?;
        self.experiences
            .delete(id)
            .await
            .map_err(map_experience_error)?
            .ok_or_else(experience_not_found)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::{MockExperienceRepository, MockUserRepository};
    use crate::domain::{AdminId, ErrorCode};
    use rstest::rstest;

    fn entry(id: i64, owner: i64) -> Experience {
        Experience {
            id: ExperienceId::new(id),
            company_name: "Initech".into(),
            role: "Analyst".into(),
            years: 2,
            user_id: UserId::new(owner),
        }
    }

    fn make_service(
        experiences: MockExperienceRepository,
        users: MockUserRepository,
    ) -> ExperienceService<MockExperienceRepository, MockUserRepository> {
        ExperienceService::new(Arc::new(experiences), Arc::new(users))
    }

    #[tokio::test]
    async fn create_for_missing_user_is_not_found() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().return_once(|_| Ok(None));
        let mut experiences = MockExperienceRepository::new();
        experiences.expect_insert().never();

        let draft = ExperienceDraft {
            company_name: "Initech".into(),
            role: "Analyst".into(),
            years: 2,
            user_id: UserId::new(4),
        };
        let error = make_service(experiences, users)
            .create(draft)
            .await
            .expect_err("missing user");
        assert_eq!(error.code(), ErrorCode::NotFound);
        assert_eq!(error.message(), "User not found");
    }

    #[rstest]
    #[case::owner(Principal::user("owner@example.com", UserId::new(4)))]
    #[case::admin(Principal::admin("boss@example.com", AdminId::new(1)))]
    #[tokio::test]
    async fn owner_or_admin_may_update(#[case] actor: Principal) {
        let mut experiences = MockExperienceRepository::new();
        experiences
            .expect_find_by_id()
            .return_once(|_| Ok(Some(entry(9, 4))));
        experiences.expect_update().times(1).returning(|id, changes| {
            let mut updated = entry(id.get(), 4);
            changes.apply_to(&mut updated);
            Ok(Some(updated))
        });

        let patch = ExperiencePatch {
            years: Some(5),
            ..ExperiencePatch::default()
        };
        let updated = make_service(experiences, MockUserRepository::new())
            .update(&actor, ExperienceId::new(9), patch)
            .await
            .expect("update");
        assert_eq!(updated.years, 5);
    }

    #[tokio::test]
    async fn another_user_may_not_delete() {
        let mut experiences = MockExperienceRepository::new();
        experiences
            .expect_find_by_id()
            .return_once(|_| Ok(Some(entry(9, 4))));
        experiences.expect_delete().never();

        let actor = Principal::user("other@example.com", UserId::new(5));
        let error = make_service(experiences, MockUserRepository::new())
            .delete(&actor, ExperienceId::new(9))
            .await
            .expect_err("forbidden");
        assert_eq!(error.code(), ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn update_of_missing_entry_is_not_found() {
        let mut experiences = MockExperienceRepository::new();
        experiences.expect_find_by_id().return_once(|_| Ok(None));

        let actor = Principal::admin("boss@example.com", AdminId::new(1));
        let error = make_service(experiences, MockUserRepository::new())
            .update(&actor, ExperienceId::new(9), ExperiencePatch::default())
            .await
            .expect_err("missing");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }
}
