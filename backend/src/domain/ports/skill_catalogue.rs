//! Driving port for the shared skill catalogue.

use async_trait::async_trait;

use crate::domain::{Error, Skill, SkillId};

/// Use-cases over skills consumed by inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SkillCatalogue: Send + Sync {
    /// Add a skill; names are unique.
    async fn create(&self, name: String) -> Result<Skill, Error>;

    /// Fetch one skill or fail with `not_found`.
    async fn get(&self, id: SkillId) -> Result<Skill, Error>;

    /// List every skill.
    async fn list(&self) -> Result<Vec<Skill>, Error>;

    /// Delete a skill and drop it from every user and posting.
    async fn delete(&self, id: SkillId) -> Result<Skill, Error>;
}
