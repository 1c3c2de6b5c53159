//! Named skills shared by users and job postings.

use serde::Serialize;

use super::SkillId;
use super::validation::{ValidationError, non_empty_text};

/// Validated skill name ready for storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSkill {
    pub name: String,
}

impl NewSkill {
    /// Validate a skill name; surrounding whitespace is dropped.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: non_empty_text(name.into(), "name")?,
        })
    }
}

/// Stored skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
}
