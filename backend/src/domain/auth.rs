//! Authentication primitives: roles, principals, passwords, and credentials.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::{AdminId, Error, UserId};

/// Role tag carried by bearer tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Wire representation of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }

    fn denial_message(self) -> &'static str {
        match self {
            Self::Admin => "Admins only",
            Self::User => "Users only",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role tag is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}

/// Authenticated caller derived from a bearer token.
///
/// ## Invariants
/// - `id` refers to an Admin when `role` is [`Role::Admin`] and to a User
///   when `role` is [`Role::User`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    email: String,
    role: Role,
    id: i64,
}

impl Principal {
    /// Build a principal from decoded token claims.
    pub fn new(email: impl Into<String>, role: Role, id: i64) -> Self {
        Self {
            email: email.into(),
            role,
            id,
        }
    }

    /// Principal for an administrator account.
    pub fn admin(email: impl Into<String>, id: AdminId) -> Self {
        Self::new(email, Role::Admin, id.get())
    }

    /// Principal for a candidate account.
    pub fn user(email: impl Into<String>, id: UserId) -> Self {
        Self::new(email, Role::User, id.get())
    }

    /// Subject email.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Role tag.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Numeric account id.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Fail with `403 Forbidden` unless the principal holds `role`.
    ///
    /// # Examples
    /// ```
    /// use jobscout::domain::{ErrorCode, Principal, Role, UserId};
    ///
    /// let principal = Principal::user("ada@example.org", UserId::new(3));
    /// let err = principal.require_role(Role::Admin).unwrap_err();
    /// assert_eq!(err.code(), ErrorCode::Forbidden);
    /// ```
    pub fn require_role(&self, role: Role) -> Result<(), Error> {
        if self.role == role {
            Ok(())
        } else {
            Err(Error::forbidden(role.denial_message()))
        }
    }

    /// Require an admin principal and return its account id.
    pub fn require_admin(&self) -> Result<AdminId, Error> {
        self.require_role(Role::Admin)?;
        Ok(AdminId::new(self.id))
    }

    /// Allow the candidate `user_id` itself or any administrator.
    pub fn require_user_or_admin(&self, user_id: UserId) -> Result<(), Error> {
        match self.role {
            Role::Admin => Ok(()),
            Role::User if self.id == user_id.get() => Ok(()),
            Role::User => Err(Error::forbidden("cannot act on another user's records")),
        }
    }
}

/// Validation errors for password and credential inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsValidationError {
    EmptyEmail,
    EmptyPassword,
}

impl fmt::Display for CredentialsValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for CredentialsValidationError {}

impl From<CredentialsValidationError> for Error {
    fn from(value: CredentialsValidationError) -> Self {
        let field = match value {
            CredentialsValidationError::EmptyEmail => "email",
            CredentialsValidationError::EmptyPassword => "password",
        };
        Error::invalid_request(value.to_string())
            .with_details(serde_json::json!({ "field": field, "code": "empty_field" }))
    }
}

/// Plaintext password held only long enough to hash or verify it.
///
/// The buffer is zeroed on drop and never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Wrap a non-empty plaintext password. Whitespace is kept as given.
    pub fn new(raw: impl Into<String>) -> Result<Self, CredentialsValidationError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(CredentialsValidationError::EmptyPassword);
        }
        Ok(Self(Zeroizing::new(raw)))
    }

    /// Plaintext value for hashing adapters.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Irreversible password hash as produced by a hashing adapter.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an encoded hash.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encoded hash for storage or verification.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

/// Validated login credentials.
///
/// ## Invariants
/// - `email` is trimmed, lower-cased, and non-empty.
/// - `password` is non-empty and keeps caller-provided whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Password,
}

impl LoginCredentials {
    /// Construct credentials from raw inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, CredentialsValidationError> {
        let normalised = email.trim();
        if normalised.is_empty() {
            return Err(CredentialsValidationError::EmptyEmail);
        }
        Ok(Self {
            email: normalised.to_lowercase(),
            password: Password::new(password)?,
        })
    }

    /// Email used for the account lookup.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password to verify.
    pub fn password(&self) -> &Password {
        &self.password
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case("admin", Some(Role::Admin))]
    #[case("user", Some(Role::User))]
    #[case("recruiter", None)]
    #[case("Admin", None)]
    fn parses_known_roles(#[case] raw: &str, #[case] expected: Option<Role>) {
        assert_eq!(raw.parse::<Role>().ok(), expected);
    }

    #[rstest]
    #[case(Role::Admin, Role::Admin, None)]
    #[case(Role::User, Role::User, None)]
    #[case(Role::User, Role::Admin, Some("Admins only"))]
    #[case(Role::Admin, Role::User, Some("Users only"))]
    fn require_role_forbids_mismatches(
        #[case] held: Role,
        #[case] required: Role,
        #[case] denial: Option<&str>,
    ) {
        let principal = Principal::new("a@x.com", held, 1);
        match (principal.require_role(required), denial) {
            (Ok(()), None) => {}
            (Err(err), Some(message)) => {
                assert_eq!(err.code(), ErrorCode::Forbidden);
                assert_eq!(err.message(), message);
            }
            (outcome, expected) => panic!("unexpected outcome {outcome:?} for {expected:?}"),
        }
    }

    #[rstest]
    #[case(Principal::user("u@x.com", UserId::new(4)), true)]
    #[case(Principal::user("v@x.com", UserId::new(5)), false)]
    #[case(Principal::admin("a@x.com", AdminId::new(5)), true)]
    fn user_scoped_actions_allow_self_or_admin(#[case] principal: Principal, #[case] allowed: bool) {
        assert_eq!(
            principal.require_user_or_admin(UserId::new(4)).is_ok(),
            allowed
        );
    }

    #[rstest]
    #[case("", "pw", CredentialsValidationError::EmptyEmail)]
    #[case("   ", "pw", CredentialsValidationError::EmptyEmail)]
    #[case("a@x.com", "", CredentialsValidationError::EmptyPassword)]
    fn invalid_credentials(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: CredentialsValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(email, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn credentials_normalise_email_and_keep_password() {
        let creds = LoginCredentials::try_from_parts("  A@X.com ", " secret ")
            .expect("valid inputs should succeed");
        assert_eq!(creds.email(), "a@x.com");
        assert_eq!(creds.password().expose(), " secret ");
    }

    #[rstest]
    fn secrets_are_redacted_in_debug_output() {
        let password = Password::new("hunter2").expect("password");
        let hash = PasswordHash::new("$2b$04$abc");
        assert!(!format!("{password:?}").contains("hunter2"));
        assert!(!format!("{hash:?}").contains("abc"));
    }
}
