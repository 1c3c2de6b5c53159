//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request bodies deserialise into all-optional DTOs so a missing field is
//! reported by name with a stable code instead of a serde message.

use serde_json::json;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidId,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidId => "invalid_id",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: i64) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value,
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn invalid_id_error(field: FieldName, value: i64) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be a positive identifier"))
        .with_value(ErrorCode::InvalidId, value)
}

/// Unwrap a required body field.
pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Unwrap a required identifier, rejecting zero and negative values.
pub(crate) fn require_id<Id>(value: Option<i64>, field: FieldName) -> Result<Id, Error>
where
    Id: From<i64>,
{
    let raw = require(value, field)?;
    parse_id(raw, field)
}

/// Validate an optional identifier, rejecting zero and negative values.
pub(crate) fn optional_id<Id>(value: Option<i64>, field: FieldName) -> Result<Option<Id>, Error>
where
    Id: From<i64>,
{
    value.map(|raw| parse_id(raw, field)).transpose()
}

fn parse_id<Id>(raw: i64, field: FieldName) -> Result<Id, Error>
where
    Id: From<i64>,
{
    if raw > 0 {
        Ok(Id::from(raw))
    } else {
        Err(invalid_id_error(field, raw))
    }
}
