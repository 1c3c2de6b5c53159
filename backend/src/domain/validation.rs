//! Field validation shared by entity drafts and patches.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::json;

use super::Error;

/// Validation failures raised while normalising entity input.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyField { field: &'static str },
    InvalidEmail { field: &'static str },
    InvalidNationalId { field: &'static str },
    NegativeValue { field: &'static str, value: i64 },
    InvalidAmount { field: &'static str, value: f64 },
}

impl ValidationError {
    /// Wire name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyField { field }
            | Self::InvalidEmail { field }
            | Self::InvalidNationalId { field }
            | Self::NegativeValue { field, .. }
            | Self::InvalidAmount { field, .. } => field,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::EmptyField { .. } => "empty_field",
            Self::InvalidEmail { .. } => "invalid_email",
            Self::InvalidNationalId { .. } => "invalid_national_id",
            Self::NegativeValue { .. } => "negative_value",
            Self::InvalidAmount { .. } => "invalid_amount",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "{field} must not be empty"),
            Self::InvalidEmail { field } => write!(f, "{field} must be a valid email address"),
            Self::InvalidNationalId { field } => {
                write!(f, "{field} may only contain digits, dots, and dashes")
            }
            Self::NegativeValue { field, value } => {
                write!(f, "{field} must not be negative (got {value})")
            }
            Self::InvalidAmount { field, value } => {
                write!(f, "{field} must be a finite, non-negative amount (got {value})")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for Error {
    fn from(value: ValidationError) -> Self {
        Error::invalid_request(value.to_string()).with_details(json!({
            "field": value.field(),
            "code": value.code(),
        }))
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static NATIONAL_ID_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

fn national_id_regex() -> &'static Regex {
    NATIONAL_ID_RE.get_or_init(|| {
        Regex::new(r"^[0-9][0-9.\-]*$")
            .unwrap_or_else(|error| panic!("national id regex failed to compile: {error}"))
    })
}

pub(crate) fn non_empty_text(
    value: String,
    field: &'static str,
) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(trimmed.to_owned())
}

/// Trim and lower-case an email after checking its shape.
pub(crate) fn email_address(value: String, field: &'static str) -> Result<String, ValidationError> {
    let normalised = non_empty_text(value, field)?.to_lowercase();
    if !email_regex().is_match(&normalised) {
        return Err(ValidationError::InvalidEmail { field });
    }
    Ok(normalised)
}

pub(crate) fn national_id(value: String, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = non_empty_text(value, field)?;
    if !national_id_regex().is_match(&trimmed) {
        return Err(ValidationError::InvalidNationalId { field });
    }
    Ok(trimmed)
}

pub(crate) fn non_negative(value: i32, field: &'static str) -> Result<i32, ValidationError> {
    if value < 0 {
        return Err(ValidationError::NegativeValue {
            field,
            value: i64::from(value),
        });
    }
    Ok(value)
}

pub(crate) fn amount(value: f64, field: &'static str) -> Result<f64, ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidAmount { field, value });
    }
    Ok(value)
}

/// Apply `validate` to an optional patch value.
pub(crate) fn optional<T, U>(
    value: Option<T>,
    field: &'static str,
    validate: impl FnOnce(T, &'static str) -> Result<U, ValidationError>,
) -> Result<Option<U>, ValidationError> {
    value.map(|inner| validate(inner, field)).transpose()
}
