//! Job postings published by companies.

use serde::Serialize;

use super::validation::{ValidationError, amount, non_empty_text, non_negative, optional};
use super::{CompanyId, JobPostingId, User};

/// Raw input for creating a job posting.
#[derive(Debug, Clone, PartialEq)]
pub struct JobPostingDraft {
    pub title: String,
    pub description: String,
    pub work_mode: String,
    pub salary: f64,
    pub openings: i32,
    pub company_id: CompanyId,
}

/// Validated job posting ready for storage.
#[derive(Debug, Clone, PartialEq)]
pub struct NewJobPosting {
    pub title: String,
    pub description: String,
    pub work_mode: String,
    pub salary: f64,
    pub openings: i32,
    pub company_id: CompanyId,
}

impl NewJobPosting {
    /// Validate and construct a new job posting.
    pub fn new(draft: JobPostingDraft) -> Result<Self, ValidationError> {
        Ok(Self {
            title: non_empty_text(draft.title, "title")?,
            description: non_empty_text(draft.description, "description")?,
            work_mode: non_empty_text(draft.work_mode, "workMode")?,
            salary: amount(draft.salary, "salary")?,
            openings: non_negative(draft.openings, "openings")?,
            company_id: draft.company_id,
        })
    }
}

/// Stored job posting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: JobPostingId,
    pub title: String,
    pub description: String,
    pub work_mode: String,
    pub salary: f64,
    pub openings: i32,
    pub company_id: CompanyId,
}

impl JobPosting {
    /// Assemble a stored posting from its parts.
    pub fn from_new(id: JobPostingId, posting: NewJobPosting) -> Self {
        Self {
            id,
            title: posting.title,
            description: posting.description,
            work_mode: posting.work_mode,
            salary: posting.salary,
            openings: posting.openings,
            company_id: posting.company_id,
        }
    }
}

/// Partial update request; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobPostingPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub work_mode: Option<String>,
    pub salary: Option<f64>,
    pub openings: Option<i32>,
    pub company_id: Option<CompanyId>,
}

/// Validated posting changes handed to the repository.
pub type JobPostingChanges = JobPostingPatch;

impl JobPostingPatch {
    /// Validate the provided fields.
    pub fn validate(self) -> Result<JobPostingChanges, ValidationError> {
        Ok(Self {
            title: optional(self.title, "title", non_empty_text)?,
            description: optional(self.description, "description", non_empty_text)?,
            work_mode: optional(self.work_mode, "workMode", non_empty_text)?,
            salary: optional(self.salary, "salary", amount)?,
            openings: optional(self.openings, "openings", non_negative)?,
            company_id: self.company_id,
        })
    }

    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overwrite the provided fields on `posting`.
    pub fn apply_to(&self, posting: &mut JobPosting) {
        if let Some(title) = &self.title {
            posting.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            posting.description.clone_from(description);
        }
        if let Some(work_mode) = &self.work_mode {
            posting.work_mode.clone_from(work_mode);
        }
        if let Some(salary) = self.salary {
            posting.salary = salary;
        }
        if let Some(openings) = self.openings {
            posting.openings = openings;
        }
        if let Some(company_id) = self.company_id {
            posting.company_id = company_id;
        }
    }
}

/// A posting together with the users who applied to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostingWithApplicants {
    #[serde(flatten)]
    pub posting: JobPosting,
    pub applicants: Vec<User>,
}
