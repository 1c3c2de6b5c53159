//! Driving port for users' work history.

use async_trait::async_trait;

use crate::domain::{
    Error, Experience, ExperienceDraft, ExperienceId, ExperiencePatch, Principal, UserId,
};

/// Use-cases over experience entries consumed by inbound adapters.
///
/// Mutations of an existing entry take the acting principal because only the
/// owning user or an admin may change it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExperienceLog: Send + Sync {
    /// Record an entry for an existing user.
    async fn create(&self, draft: ExperienceDraft) -> Result<Experience, Error>;

    /// Fetch one entry or fail with `not_found`.
    async fn get(&self, id: ExperienceId) -> Result<Experience, Error>;

    /// List the entries of an existing user.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Experience>, Error>;

    /// Apply a partial update on behalf of `actor`.
    async fn update(
        &self,
        actor: &Principal,
        id: ExperienceId,
        patch: ExperiencePatch,
    ) -> Result<Experience, Error>;

    /// Delete an entry on behalf of `actor`.
    async fn delete(&self, actor: &Principal, id: ExperienceId) -> Result<Experience, Error>;
}
