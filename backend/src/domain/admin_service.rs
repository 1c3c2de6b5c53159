//! Admin account service implementing the [`AdminAccounts`] driving port.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::ports::{AdminAccounts, AdminRepository, AdminRepositoryError, PasswordHasher};
use crate::domain::{Admin, AdminDraft, AdminId, AdminPatch, Error};

use super::service_support::map_hasher_error;

/// Registers and maintains admin accounts.
#[derive(Clone)]
pub struct AdminAccountService<R, H> {
    admins: Arc<R>,
    hasher: Arc<H>,
}

impl<R, H> AdminAccountService<R, H> {
    /// Create a new service over the given repository and hasher.
    pub fn new(admins: Arc<R>, hasher: Arc<H>) -> Self {
        Self { admins, hasher }
    }
}

pub(crate) fn map_admin_error(error: AdminRepositoryError) -> Error {
    match error {
        AdminRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("admin repository unavailable: {message}"))
        }
        AdminRepositoryError::Query { message } => {
            Error::internal(format!("admin repository error: {message}"))
        }
        AdminRepositoryError::Duplicate { key } => key.conflict(),
        AdminRepositoryError::StillReferenced { message } => {
            Error::conflict("Admin still owns companies").with_details(json!({
                "relation": message,
                "code": "still_referenced",
            }))
        }
    }
}

pub(crate) fn admin_not_found() -> Error {
    Error::not_found("Admin not found")
}

#[async_trait]
impl<R, H> AdminAccounts for AdminAccountService<R, H>
where
    R: AdminRepository,
    H: PasswordHasher,
{
    async fn register(&self, draft: AdminDraft) -> Result<Admin, Error> {
        let (profile, password) = draft.validate()?;
        let hash = self
            .hasher
            .hash(&password)
            .await
            .map_err(map_hasher_error)?;
        let admin = self
            .admins
            .insert(&profile, &hash)
            .await
            .map_err(map_admin_error)?;
        tracing::info!(admin_id = %admin.id, "admin registered");
        Ok(admin)
    }

    async fn get(&self, id: AdminId) -> Result<Admin, Error> {
        self.admins
            .find_by_id(id)
            .await
            .map_err(map_admin_error)?
            .ok_or_else(admin_not_found)
    }

    async fn get_by_email(&self, email: &str) -> Result<Admin, Error> {
        self.admins
            .find_by_email(&email.trim().to_lowercase())
            .await
            .map_err(map_admin_error)?
            .ok_or_else(admin_not_found)
    }

    async fn list(&self) -> Result<Vec<Admin>, Error> {
        self.admins.list().await.map_err(map_admin_error)
    }

    async fn update(&self, id: AdminId, patch: AdminPatch) -> Result<Admin, Error> {
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
        self.admins
            .update(id, &changes)
            .await
            .map_err(map_admin_error)?
            .ok_or_else(admin_not_found)
    }

    async fn delete(&self, id: AdminId) -> Result<Admin, Error> {
        let admin = self
            .admins
            .delete(id)
            .await
            .map_err(map_admin_error)?
            .ok_or_else(admin_not_found)?;
        tracing::info!(admin_id = %admin.id, "admin deleted");
        Ok(admin)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::{FixturePasswordHasher, MockAdminRepository, UniqueKey};
    use crate::domain::{AdminProfile, ErrorCode, PasswordHash};
    use rstest::{fixture, rstest};

    fn make_service(
        repo: MockAdminRepository,
    ) -> AdminAccountService<MockAdminRepository, FixturePasswordHasher> {
        AdminAccountService::new(Arc::new(repo), Arc::new(FixturePasswordHasher))
    }

    #[fixture]
    fn draft() -> AdminDraft {
        AdminDraft {
            name: "Grace Hopper".into(),
            national_id: "12.345.678".into(),
            email: "Grace@Example.com".into(),
            phone: "555-0100".into(),
            password: "cobol".into(),
        }
    }

    fn stored(profile: &AdminProfile, hash: &PasswordHash) -> Admin {
        Admin::from_profile(AdminId::new(1), profile.clone(), hash.clone())
    }

    #[rstest]
    #[tokio::test]
    async fn register_hashes_password_and_normalises_email(draft: AdminDraft) {
        let mut repo = MockAdminRepository::new();
        repo.expect_insert()
            .withf(|profile, hash| {
                profile.email == "grace@example.com" && hash.as_str() != "cobol"
            })
            .times(1)
            .returning(|profile, hash| Ok(stored(profile, hash)));

        let admin = make_service(repo).register(draft).await.expect("register");
        assert_eq!(admin.id, AdminId::new(1));
        assert_eq!(admin.email, "grace@example.com");
    }

    #[rstest]
    #[case(UniqueKey::Email, "Email already registered")]
    #[case(UniqueKey::NationalId, "National ID already registered")]
    #[tokio::test]
    async fn register_reports_duplicates_as_conflict(
        draft: AdminDraft,
        #[case] key: UniqueKey,
        #[case] message: &str,
    ) {
        let mut repo = MockAdminRepository::new();
        repo.expect_insert()
            .times(1)
            .return_once(move |_, _| Err(AdminRepositoryError::duplicate(key)));

        let error = make_service(repo)
            .register(draft)
            .await
            .expect_err("duplicate");
        assert_eq!(error.code(), ErrorCode::Conflict);
        assert_eq!(error.message(), message);
    }

    #[rstest]
    #[tokio::test]
    async fn register_rejects_invalid_draft_without_touching_store(mut draft: AdminDraft) {
        draft.email = "not-an-email".into();
        let error = make_service(MockAdminRepository::new())
            .register(draft)
            .await
            .expect_err("invalid");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }

    #[tokio::test]
    async fn get_missing_admin_is_not_found() {
        let mut repo = MockAdminRepository::new();
        repo.expect_find_by_id().return_once(|_| Ok(None));

        let error = make_service(repo)
            .get(AdminId::new(9))
            .await
            .expect_err("missing");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn update_rehashes_new_password(draft: AdminDraft) {
        let (profile, _) = draft.validate().expect("valid");
        let mut repo = MockAdminRepository::new();
        repo.expect_update()
            .withf(|_, changes| {
                changes
                    .password_hash
                    .as_ref()
                    .is_some_and(|hash| hash.as_str() != "new-secret")
            })
            .times(1)
            .returning(move |id, changes| {
                let mut admin = Admin::from_profile(id, profile.clone(), PasswordHash::new("old"));
                changes.apply_to(&mut admin);
                Ok(Some(admin))
            });

        let patch = AdminPatch {
            password: Some("new-secret".into()),
            ..AdminPatch::default()
        };
        let admin = make_service(repo)
            .update(AdminId::new(1), patch)
            .await
            .expect("update");
        assert_ne!(admin.password_hash.as_str(), "old");
    }

    #[tokio::test]
    async fn delete_referenced_admin_is_conflict() {
        let mut repo = MockAdminRepository::new();
        repo.expect_delete()
            .return_once(|_| Err(AdminRepositoryError::still_referenced("companies")));

        let error = make_service(repo)
            .delete(AdminId::new(1))
            .await
            .expect_err("referenced");
        assert_eq!(error.code(), ErrorCode::Conflict);
    }

    #[rstest]
    #[case(AdminRepositoryError::connection("down"), ErrorCode::ServiceUnavailable)]
    #[case(AdminRepositoryError::query("boom"), ErrorCode::InternalError)]
    fn repository_failures_map_to_transport_neutral_codes(
        #[case] error: AdminRepositoryError,
        #[case] expected: ErrorCode,
    ) {
        assert_eq!(map_admin_error(error).code(), expected);
    }
}
