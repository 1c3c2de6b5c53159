//! Port abstraction for experience persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Experience, ExperienceChanges, ExperienceId, NewExperience, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by experience repository adapters.
    pub enum ExperienceRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "experience repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "experience repository query failed: {message}",
        /// The referenced user does not exist.
        MissingUser { user_id: UserId } => "user {user_id} does not exist",
    }
}

/// Store of work-history entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// Persist a new entry and return it with its assigned id.
    async fn insert(
        &self,
        experience: &NewExperience,
    ) -> Result<Experience, ExperienceRepositoryError>;

    /// Fetch an entry by identifier.
    async fn find_by_id(
        &self,
        id: ExperienceId,
    ) -> Result<Option<Experience>, ExperienceRepositoryError>;

    /// List the entries of one user ordered by id.
    async fn list_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Experience>, ExperienceRepositoryError>;

    /// Apply `changes`; `None` when the entry does not exist.
    async fn update(
        &self,
        id: ExperienceId,
        changes: &ExperienceChanges,
    ) -> Result<Option<Experience>, ExperienceRepositoryError>;

    /// Remove the entry and return it; `None` when it does not exist.
    async fn delete(
        &self,
        id: ExperienceId,
    ) -> Result<Option<Experience>, ExperienceRepositoryError>;
}
