//! Store-assigned entity identifiers.
//!
//! Identifiers are positive integers handed out by the store on insert and
//! carried in bearer tokens, so they stay numeric on the wire.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw store identifier.
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Raw identifier as stored.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

define_entity_id!(
    /// Identifier of an [`Admin`](super::Admin).
    AdminId
);
define_entity_id!(
    /// Identifier of a [`User`](super::User).
    UserId
);
define_entity_id!(
    /// Identifier of a [`Company`](super::Company).
    CompanyId
);
define_entity_id!(
    /// Identifier of a [`JobPosting`](super::JobPosting).
    JobPostingId
);
define_entity_id!(
    /// Identifier of a [`Skill`](super::Skill).
    SkillId
);
define_entity_id!(
    /// Identifier of an [`Experience`](super::Experience).
    ExperienceId
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn serialises_as_bare_integer() {
        let value = serde_json::to_value(CompanyId::new(42)).expect("serialise id");
        assert_eq!(value, serde_json::json!(42));
    }

    #[rstest]
    fn deserialises_from_bare_integer() {
        let id: SkillId = serde_json::from_str("7").expect("deserialise id");
        assert_eq!(id.get(), 7);
    }
}
