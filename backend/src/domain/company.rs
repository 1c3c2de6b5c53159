//! Employer companies owned by an admin.

use serde::Serialize;

use super::validation::{ValidationError, non_empty_text, non_negative, optional};
use super::{AdminId, CompanyId};

/// Raw input for creating a company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyDraft {
    pub name: String,
    pub description: String,
    pub city: String,
    pub postal_code: String,
    pub employee_count: i32,
    pub years_active: i32,
    pub admin_id: AdminId,
}

/// Validated company ready for storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCompany {
    pub name: String,
    pub description: String,
    pub city: String,
    pub postal_code: String,
    pub employee_count: i32,
    pub years_active: i32,
    pub admin_id: AdminId,
}

impl NewCompany {
    /// Validate and construct a new company.
    pub fn new(draft: CompanyDraft) -> Result<Self, ValidationError> {
        Ok(Self {
            name: non_empty_text(draft.name, "name")?,
            description: non_empty_text(draft.description, "description")?,
            city: non_empty_text(draft.city, "city")?,
            postal_code: non_empty_text(draft.postal_code, "postalCode")?,
            employee_count: non_negative(draft.employee_count, "employeeCount")?,
            years_active: non_negative(draft.years_active, "yearsActive")?,
            admin_id: draft.admin_id,
        })
    }
}

/// Stored company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub description: String,
    pub city: String,
    pub postal_code: String,
    pub employee_count: i32,
    pub years_active: i32,
    pub admin_id: AdminId,
}

impl Company {
    /// Assemble a stored company from its parts.
    pub fn from_new(id: CompanyId, company: NewCompany) -> Self {
        Self {
            id,
            name: company.name,
            description: company.description,
            city: company.city,
            postal_code: company.postal_code,
            employee_count: company.employee_count,
            years_active: company.years_active,
            admin_id: company.admin_id,
        }
    }
}

/// Partial update request; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub employee_count: Option<i32>,
    pub years_active: Option<i32>,
    pub admin_id: Option<AdminId>,
}

/// Validated company changes handed to the repository.
pub type CompanyChanges = CompanyPatch;

impl CompanyPatch {
    /// Validate the provided fields.
    pub fn validate(self) -> Result<CompanyChanges, ValidationError> {
        Ok(Self {
            name: optional(self.name, "name", non_empty_text)?,
            description: optional(self.description, "description", non_empty_text)?,
            city: optional(self.city, "city", non_empty_text)?,
            postal_code: optional(self.postal_code, "postalCode", non_empty_text)?,
            employee_count: optional(self.employee_count, "employeeCount", non_negative)?,
            years_active: optional(self.years_active, "yearsActive", non_negative)?,
            admin_id: self.admin_id,
        })
    }

    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overwrite the provided fields on `company`.
    pub fn apply_to(&self, company: &mut Company) {
        if let Some(name) = &self.name {
            company.name.clone_from(name);
        }
        if let Some(description) = &self.description {
            company.description.clone_from(description);
        }
        if let Some(city) = &self.city {
            company.city.clone_from(city);
        }
        if let Some(postal_code) = &self.postal_code {
            company.postal_code.clone_from(postal_code);
        }
        if let Some(count) = self.employee_count {
            company.employee_count = count;
        }
        if let Some(years) = self.years_active {
            company.years_active = years;
        }
        if let Some(admin_id) = self.admin_id {
            company.admin_id = admin_id;
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn draft() -> CompanyDraft {
        CompanyDraft {
            name: "Acme".to_owned(),
            description: "Anvils".to_owned(),
            city: "Recife".to_owned(),
            postal_code: "50000-000".to_owned(),
            employee_count: 40,
            years_active: 3,
            admin_id: AdminId::new(1),
        }
    }

    #[rstest]
    fn valid_draft_builds_company(draft: CompanyDraft) {
        let company = NewCompany::new(draft).expect("valid draft");
        let stored = Company::from_new(CompanyId::new(5), company);
        assert_eq!(stored.id, CompanyId::new(5));
        assert_eq!(stored.admin_id, AdminId::new(1));
    }

    #[rstest]
    fn negative_employee_count_is_rejected(mut draft: CompanyDraft) {
        draft.employee_count = -1;
        let err = NewCompany::new(draft).expect_err("negative count");
        assert_eq!(
            err,
            ValidationError::NegativeValue {
                field: "employeeCount",
                value: -1
            }
        );
    }

    #[rstest]
    fn patch_changes_only_provided_fields(draft: CompanyDraft) {
        let original = Company::from_new(
            CompanyId::new(2),
            NewCompany::new(draft).expect("valid draft"),
        );
        let changes = CompanyPatch {
            city: Some(" Olinda ".to_owned()),
            ..CompanyPatch::default()
        }
        .validate()
        .expect("valid patch");

        let mut updated = original.clone();
        changes.apply_to(&mut updated);
        assert_eq!(updated.city, "Olinda");
        assert_eq!(
            Company {
                city: original.city.clone(),
                ..updated
            },
            original
        );
    }

    #[rstest]
    fn default_patch_is_empty() {
        assert!(CompanyPatch::default().is_empty());
    }
}
