//! Candidate accounts.
//!
//! Users hold skills, apply to job postings, and record work experience.

use serde::Serialize;

use super::validation::{ValidationError, email_address, national_id, non_empty_text, optional};
use super::{Password, PasswordHash, UserId};

/// Raw input for registering a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub national_id: String,
    pub email: String,
    pub phone: String,
    pub work_area: String,
    pub education_level: String,
    pub password: String,
}

/// Validated user profile fields ready for storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub national_id: String,
    pub email: String,
    pub phone: String,
    pub work_area: String,
    pub education_level: String,
}

impl UserDraft {
    /// Validate the draft and split off the plaintext password.
    pub fn validate(self) -> Result<(UserProfile, Password), ValidationError> {
        let profile = UserProfile {
            name: non_empty_text(self.name, "name")?,
            national_id: national_id(self.national_id, "nationalId")?,
            email: email_address(self.email, "email")?,
            phone: non_empty_text(self.phone, "phone")?,
            work_area: non_empty_text(self.work_area, "workArea")?,
            education_level: non_empty_text(self.education_level, "educationLevel")?,
        };
        let password = Password::new(self.password)
            .map_err(|_| ValidationError::EmptyField { field: "password" })?;
        Ok((profile, password))
    }
}

/// Stored candidate account. The password hash is never serialised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub national_id: String,
    pub email: String,
    pub phone: String,
    pub work_area: String,
    pub education_level: String,
    #[serde(skip)]
    pub password_hash: PasswordHash,
}

impl User {
    /// Assemble a stored user from its parts.
    pub fn from_profile(id: UserId, profile: UserProfile, password_hash: PasswordHash) -> Self {
        let UserProfile {
            name,
            national_id,
            email,
            phone,
            work_area,
            education_level,
        } = profile;
        Self {
            id,
            name,
            national_id,
            email,
            phone,
            work_area,
            education_level,
            password_hash,
        }
    }
}

/// Partial update request; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub national_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub work_area: Option<String>,
    pub education_level: Option<String>,
    pub password: Option<String>,
}

impl UserPatch {
    /// Validate provided fields and split off a replacement password.
    pub fn validate(self) -> Result<(UserChanges, Option<Password>), ValidationError> {
        let changes = UserChanges {
            name: optional(self.name, "name", non_empty_text)?,
            national_id: optional(self.national_id, "nationalId", national_id)?,
            email: optional(self.email, "email", email_address)?,
            phone: optional(self.phone, "phone", non_empty_text)?,
            work_area: optional(self.work_area, "workArea", non_empty_text)?,
            education_level: optional(self.education_level, "educationLevel", non_empty_text)?,
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

/// Validated user changes handed to the repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub national_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub work_area: Option<String>,
    pub education_level: Option<String>,
    pub password_hash: Option<PasswordHash>,
}

impl UserChanges {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.national_id.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.work_area.is_none()
            && self.education_level.is_none()
            && self.password_hash.is_none()
    }

    /// Overwrite the provided fields on `user`.
    pub fn apply_to(&self, user: &mut User) {
        let text_fields = [
            (&self.name, &mut user.name),
            (&self.national_id, &mut user.national_id),
            (&self.email, &mut user.email),
            (&self.phone, &mut user.phone),
            (&self.work_area, &mut user.work_area),
            (&self.education_level, &mut user.education_level),
        ];
        for (change, target) in text_fields {
            if let Some(value) = change {
                target.clone_from(value);
            }
        }
        if let Some(hash) = &self.password_hash {
            user.password_hash = hash.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn stored() -> User {
        User {
            id: UserId::new(9),
            name: "Ada".to_owned(),
            national_id: "222".to_owned(),
            email: "ada@x.com".to_owned(),
            phone: "555".to_owned(),
            work_area: "Engineering".to_owned(),
            education_level: "Masters".to_owned(),
            password_hash: PasswordHash::new("hash"),
        }
    }

    #[rstest]
    fn draft_requires_work_area() {
        let draft = UserDraft {
            name: "Ada".to_owned(),
            national_id: "222".to_owned(),
            email: "ada@x.com".to_owned(),
            phone: "555".to_owned(),
            work_area: "  ".to_owned(),
            education_level: "Masters".to_owned(),
            password: "pw".to_owned(),
        };
        let err = draft.validate().expect_err("blank work area");
        assert_eq!(err.field(), "workArea");
    }

    #[rstest]
    fn empty_patch_leaves_user_unchanged(stored: User) {
        let (changes, password) = UserPatch::default().validate().expect("valid patch");
        assert!(changes.is_empty());
        assert!(password.is_none());
        let mut user = stored.clone();
        changes.apply_to(&mut user);
        assert_eq!(user, stored);
    }

    #[rstest]
    fn patch_overwrites_only_provided_fields(stored: User) {
        let patch = UserPatch {
            education_level: Some("PhD".to_owned()),
            password: Some("new-pass".to_owned()),
            ..UserPatch::default()
        };
        let (mut changes, password) = patch.validate().expect("valid patch");
        assert_eq!(password.map(|p| p.expose().to_owned()), Some("new-pass".to_owned()));
        changes.password_hash = Some(PasswordHash::new("rehashed"));

        let mut user = stored.clone();
        changes.apply_to(&mut user);
        assert_eq!(user.education_level, "PhD");
        assert_eq!(user.password_hash, PasswordHash::new("rehashed"));
        assert_eq!(user.name, stored.name);
        assert_eq!(user.email, stored.email);
    }

    #[rstest]
    fn patch_rejects_blank_password() {
        let patch = UserPatch {
            password: Some(String::new()),
            ..UserPatch::default()
        };
        let err = patch.validate().expect_err("blank password");
        assert_eq!(err.field(), "password");
    }
}
