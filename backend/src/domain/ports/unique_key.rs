//! Unique columns whose violations surface as conflicts.

use std::fmt;

use serde_json::json;

use crate::domain::Error;

/// Unique value guarded by a store constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniqueKey {
    /// Account email, unique within its collection.
    Email,
    /// Account national ID, unique within its collection.
    NationalId,
    /// Skill name.
    SkillName,
}

impl UniqueKey {
    /// Wire name of the field backing the constraint.
    pub fn field(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::NationalId => "nationalId",
            Self::SkillName => "name",
        }
    }

    /// Message reported to callers on a duplicate.
    pub fn conflict_message(self) -> &'static str {
        match self {
            Self::Email => "Email already registered",
            Self::NationalId => "National ID already registered",
            Self::SkillName => "Skill already exists",
        }
    }

    /// Domain conflict naming the offending field.
    pub fn conflict(self) -> Error {
        Error::conflict(self.conflict_message()).with_details(json!({
            "field": self.field(),
            "code": "duplicate",
        }))
    }
}

impl fmt::Display for UniqueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}
