//! Port abstraction for the skill catalogue store.

use async_trait::async_trait;

use crate::domain::{NewSkill, Skill, SkillId};

use super::{UniqueKey, define_port_error};

define_port_error! {
    /// Persistence errors raised by skill repository adapters.
    pub enum SkillRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "skill repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "skill repository query failed: {message}",
        /// A skill with the same name exists.
        Duplicate { key: UniqueKey } => "skill {key} already exists",
    }
}

/// Store of skills. Deleting a skill drops it from every user and posting.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// Persist a new skill and return it with its assigned id.
    async fn insert(&self, skill: &NewSkill) -> Result<Skill, SkillRepositoryError>;

    /// Fetch a skill by identifier.
    async fn find_by_id(&self, id: SkillId) -> Result<Option<Skill>, SkillRepositoryError>;

    /// List all skills ordered by id.
    async fn list(&self) -> Result<Vec<Skill>, SkillRepositoryError>;

    /// Remove the skill and return it; `None` when it does not exist.
    async fn delete(&self, id: SkillId) -> Result<Option<Skill>, SkillRepositoryError>;
}
