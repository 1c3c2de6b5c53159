//! Candidate account service implementing the [`UserAccounts`] driving port.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{PasswordHasher, UserAccounts, UserRepository, UserRepositoryError};
use crate::domain::{Error, User, UserDraft, UserId, UserPatch};

use super::service_support::map_hasher_error;

/// Registers and maintains user accounts.
#[derive(Clone)]
pub struct UserAccountService<R, H> {
    users: Arc<R>,
    hasher: Arc<H>,
}

impl<R, H> UserAccountService<R, H> {
    /// Create a new service over the given repository and hasher.
    pub fn new(users: Arc<R>, hasher: Arc<H>) -> Self {
        Self { users, hasher }
    }
}

pub(crate) fn map_user_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserRepositoryError::Duplicate { key } => key.conflict(),
    }
}

pub(crate) fn user_not_found() -> Error {
    Error::not_found("User not found")
}

#[async_trait]
impl<R, H> UserAccounts for UserAccountService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    async fn register(&self, draft: UserDraft) -> Result<User, Error> {
        let (profile, password) = draft.validate()?;
        let hash = self
            .hasher
            .hash(&password)
            .await
            .map_err(map_hasher_error)?;
        let user = self
            .users
            .insert(&profile, &hash)
            .await
            .map_err(map_user_error)?;
        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    async fn get(&self, id: UserId) -> Result<User, Error> {
        self.users
            .find_by_id(id)
            .await
            .map_err(map_user_error)?
            .ok_or_else(user_not_found)
    }

    async fn get_by_email(&self, email: &str) -> Result<User, Error> {
        self.users
            .find_by_email(&email.trim().to_lowercase())
            .await
            .map_err(map_user_error)?
            .ok_or_else(user_not_found)
    }

    async fn list(&self) -> Result<Vec<User>, Error> {
        self.users.list().await.map_err(map_user_error)
    }

    async fn update(&self, id: UserId, patch: UserPatch) -> Result<User, Error> {
        let (mut changes, password) = patch.validate()?;
        if let Some(password) = password {
            changes.password_hash = Some(
                self.hasher
                    .hash(&password)
                    .await
                    .map_err(map_hasher_error)?,
            );
        }
        if changes.is_empty() {
            return self.get(id).await;
        }
        self.users
            .update(id, &changes)
            .await
            .map_err(map_user_error)?
            .ok_or_else(user_not_found)
    }

    async fn delete(&self, id: UserId) -> Result<User, Error> {
        let user = self
            .users
            .delete(id)
            .await
            .map_err(map_user_error)?
            .ok_or_else(user_not_found)?;
        tracing::info!(user_id = %user.id, "user deleted");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::{FixturePasswordHasher, MockUserRepository, UniqueKey};
    use crate::domain::{ErrorCode, PasswordHash, UserProfile};
    use rstest::{fixture, rstest};

    fn make_service(
        repo: MockUserRepository,
    ) -> UserAccountService<MockUserRepository, FixturePasswordHasher> {
        UserAccountService::new(Arc::new(repo), Arc::new(FixturePasswordHasher))
    }

    #[fixture]
    fn draft() -> UserDraft {
        UserDraft {
            name: "Ada Lovelace".into(),
            national_id: "20123456".into(),
            email: " ada@example.com ".into(),
            phone: "555-0101".into(),
            work_area: "Engineering".into(),
            education_level: "University".into(),
            password: "analytical".into(),
        }
    }

    fn stored(id: i64, profile: &UserProfile, hash: &PasswordHash) -> User {
        User::from_profile(UserId::new(id), profile.clone(), hash.clone())
    }

    #[rstest]
    #[tokio::test]
    async fn register_stores_trimmed_email_and_hash(draft: UserDraft) {
        let mut repo = MockUserRepository::new();
        repo.expect_insert()
            .withf(|profile, hash| {
                profile.email == "ada@example.com" && hash.as_str() != "analytical"
            })
            .times(1)
            .returning(|profile, hash| Ok(stored(7, profile, hash)));

        let user = make_service(repo).register(draft).await.expect("register");
        assert_eq!(user.id, UserId::new(7));
        assert_eq!(user.work_area, "Engineering");
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_email_is_conflict(draft: UserDraft) {
        let mut repo = MockUserRepository::new();
        repo.expect_insert()
            .return_once(|_, _| Err(UserRepositoryError::duplicate(UniqueKey::Email)));

        let error = make_service(repo)
            .register(draft)
            .await
            .expect_err("duplicate");
        assert_eq!(error.code(), ErrorCode::Conflict);
        let details = error.details().expect("details");
        assert_eq!(details["field"], "email");
    }

    #[rstest]
    #[tokio::test]
    async fn blank_work_area_names_the_field(mut draft: UserDraft) {
        draft.work_area = "   ".into();
        let error = make_service(MockUserRepository::new())
            .register(draft)
            .await
            .expect_err("invalid");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        let details = error.details().expect("details");
        assert_eq!(details["field"], "workArea");
    }

    #[rstest]
    #[tokio::test]
    async fn empty_patch_returns_current_user(draft: UserDraft) {
        let (profile, _) = draft.validate().expect("valid");
        let mut repo = MockUserRepository::new();
        repo.expect_update().never();
        repo.expect_find_by_id()
            .times(1)
            .returning(move |id| {
                Ok(Some(User::from_profile(
                    id,
                    profile.clone(),
                    PasswordHash::new("h"),
                )))
            });

        let user = make_service(repo)
            .update(UserId::new(3), UserPatch::default())
            .await
            .expect("unchanged");
        assert_eq!(user.id, UserId::new(3));
    }

    #[tokio::test]
    async fn update_of_missing_user_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_update().return_once(|_, _| Ok(None));

        let patch = UserPatch {
            phone: Some("555-0199".into()),
            ..UserPatch::default()
        };
        let error = make_service(repo)
            .update(UserId::new(3), patch)
            .await
            .expect_err("missing");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn lookup_by_email_normalises_case() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "ada@example.com")
            .return_once(|_| Ok(None));

        let error = make_service(repo)
            .get_by_email("ADA@example.com")
            .await
            .expect_err("missing");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }
}
