//! Work-history entries recorded by users.

use serde::Serialize;

use super::validation::{ValidationError, non_empty_text, non_negative, optional};
use super::{ExperienceId, UserId};

/// Raw input for recording an experience.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceDraft {
    pub company_name: String,
    pub role: String,
    pub years: i32,
    pub user_id: UserId,
}

/// Validated experience ready for storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExperience {
    pub company_name: String,
    pub role: String,
    pub years: i32,
    pub user_id: UserId,
}

impl NewExperience {
    /// Validate and construct a new experience entry.
    pub fn new(draft: ExperienceDraft) -> Result<Self, ValidationError> {
        Ok(Self {
            company_name: non_empty_text(draft.company_name, "companyName")?,
            role: non_empty_text(draft.role, "role")?,
            years: non_negative(draft.years, "years")?,
            user_id: draft.user_id,
        })
    }
}

/// Stored experience entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: ExperienceId,
    pub company_name: String,
    pub role: String,
    pub years: i32,
    pub user_id: UserId,
}

impl Experience {
    /// Assemble a stored experience from its parts.
    pub fn from_new(id: ExperienceId, experience: NewExperience) -> Self {
        Self {
            id,
            company_name: experience.company_name,
            role: experience.role,
            years: experience.years,
            user_id: experience.user_id,
        }
    }
}

/// Partial update request; `None` keeps the current value.
///
/// The owning user cannot be changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperiencePatch {
    pub company_name: Option<String>,
    pub role: Option<String>,
    pub years: Option<i32>,
}

/// Validated experience changes handed to the repository.
pub type ExperienceChanges = ExperiencePatch;

impl ExperiencePatch {
    /// Validate the provided fields.
    pub fn validate(self) -> Result<ExperienceChanges, ValidationError> {
        Ok(Self {
            company_name: optional(self.company_name, "companyName", non_empty_text)?,
            role: optional(self.role, "role", non_empty_text)?,
            years: optional(self.years, "years", non_negative)?,
        })
    }

    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overwrite the provided fields on `experience`.
    pub fn apply_to(&self, experience: &mut Experience) {
        if let Some(company_name) = &self.company_name {
            experience.company_name.clone_from(company_name);
        }
        if let Some(role) = &self.role {
            experience.role.clone_from(role);
        }
        if let Some(years) = self.years {
            experience.years = years;
        }
    }
}
