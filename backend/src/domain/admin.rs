//! Administrator accounts.
//!
//! Admins own companies and manage job postings and the skill catalogue.

use serde::Serialize;

use super::validation::{ValidationError, email_address, national_id, non_empty_text, optional};
use super::{AdminId, Password, PasswordHash};

/// Raw input for registering an admin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminDraft {
    pub name: String,
    pub national_id: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Validated admin profile fields ready for storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminProfile {
    pub name: String,
    pub national_id: String,
    pub email: String,
    pub phone: String,
}

impl AdminDraft {
    /// Validate the draft and split off the plaintext password.
    pub fn validate(self) -> Result<(AdminProfile, Password), ValidationError> {
        let profile = AdminProfile {
            name: non_empty_text(self.name, "name")?,
            national_id: national_id(self.national_id, "nationalId")?,
            email: email_address(self.email, "email")?,
            phone: non_empty_text(self.phone, "phone")?,
        };
        let password = Password::new(self.password)
            .map_err(|_| ValidationError::EmptyField { field: "password" })?;
        Ok((profile, password))
    }
}

/// Stored administrator account.
///
/// The password hash is never serialised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: AdminId,
    pub name: String,
    pub national_id: String,
    pub email: String,
    pub phone: String,
    #[serde(skip)]
    pub password_hash: PasswordHash,
}

impl Admin {
    /// Assemble a stored admin from its parts.
    pub fn from_profile(id: AdminId, profile: AdminProfile, password_hash: PasswordHash) -> Self {
        let AdminProfile {
            name,
            national_id,
            email,
            phone,
        } = profile;
        Self {
            id,
            name,
            national_id,
            email,
            phone,
            password_hash,
        }
    }
}

/// Partial update request; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminPatch {
    pub name: Option<String>,
    pub national_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

impl AdminPatch {
    /// Validate provided fields and split off a replacement password.
    pub fn validate(self) -> Result<(AdminChanges, Option<Password>), ValidationError> {
        let changes = AdminChanges {
            name: optional(self.name, "name", non_empty_text)?,
            national_id: optional(self.national_id, "nationalId", national_id)?,
            email: optional(self.email, "email", email_address)?,
            phone: optional(self.phone, "phone", non_empty_text)?,
            password_hash: None,
        };
        let password = self
            .password
            .map(Password::new)
            .transpose()
            .map_err(|_| ValidationError::EmptyField { field: "password" })?;
        Ok((changes, password))
    }
}

/// Validated admin changes handed to the repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminChanges {
    pub name: Option<String>,
    pub national_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password_hash: Option<PasswordHash>,
}

impl AdminChanges {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.national_id.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.password_hash.is_none()
    }

    /// Overwrite the provided fields on `admin`.
    pub fn apply_to(&self, admin: &mut Admin) {
        if let Some(name) = &self.name {
            admin.name.clone_from(name);
        }
        if let Some(national_id) = &self.national_id {
            admin.national_id.clone_from(national_id);
        }
        if let Some(email) = &self.email {
            admin.email.clone_from(email);
        }
        if let Some(phone) = &self.phone {
            admin.phone.clone_from(phone);
        }
        if let Some(hash) = &self.password_hash {
            admin.password_hash = hash.clone();
        }
    }
}
