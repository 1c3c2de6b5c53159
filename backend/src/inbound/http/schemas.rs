//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the serialised shape of their domain types but
//! live in the inbound adapter layer where framework concerns belong.

#![expect(
    dead_code,
    reason = "Schema wrappers exist only for OpenAPI generation via utoipa"
)]

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Authentication failed or is missing.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// Authenticated but not permitted to perform this action.
    #[schema(rename = "forbidden")]
    Forbidden,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A unique value or association already exists.
    #[schema(rename = "conflict")]
    Conflict,
    /// The store could not be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Email already registered")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details, such as the offending field.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Admin`].
// No password field: the hash is never serialised.
#[derive(ToSchema)]
#[schema(as = crate::domain::Admin, rename_all = "camelCase")]
pub struct AdminSchema {
    #[schema(example = 1)]
    id: i64,
    #[schema(example = "Grace Hopper")]
    name: String,
    #[schema(example = "123.456.789-09")]
    national_id: String,
    #[schema(example = "grace@example.org")]
    email: String,
    phone: String,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User, rename_all = "camelCase")]
pub struct UserSchema {
    #[schema(example = 7)]
    id: i64,
    #[schema(example = "Ada Lovelace")]
    name: String,
    national_id: String,
    #[schema(example = "ada@example.org")]
    email: String,
    phone: String,
    #[schema(example = "Engineering")]
    work_area: String,
    #[schema(example = "University")]
    education_level: String,
}

/// OpenAPI schema for [`crate::domain::Company`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Company, rename_all = "camelCase")]
pub struct CompanySchema {
    id: i64,
    #[schema(example = "Acme")]
    name: String,
    description: String,
    #[schema(example = "Recife")]
    city: String,
    #[schema(example = "50000-000")]
    postal_code: String,
    employee_count: i32,
    years_active: i32,
    admin_id: i64,
}

/// OpenAPI schema for [`crate::domain::JobPosting`].
#[derive(ToSchema)]
#[schema(as = crate::domain::JobPosting, rename_all = "camelCase")]
pub struct JobPostingSchema {
    id: i64,
    #[schema(example = "Backend Engineer")]
    title: String,
    description: String,
    #[schema(example = "remote")]
    work_mode: String,
    #[schema(example = 9000.0)]
    salary: f64,
    openings: i32,
    company_id: i64,
}

/// OpenAPI schema for [`crate::domain::JobPostingWithApplicants`]: the
/// posting fields plus its applicants.
#[derive(ToSchema)]
#[schema(as = crate::domain::JobPostingWithApplicants, rename_all = "camelCase")]
pub struct JobPostingWithApplicantsSchema {
    id: i64,
    title: String,
    description: String,
    work_mode: String,
    salary: f64,
    openings: i32,
    company_id: i64,
    applicants: Vec<UserSchema>,
}

/// OpenAPI schema for [`crate::domain::Skill`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Skill)]
pub struct SkillSchema {
    id: i64,
    #[schema(example = "Python")]
    name: String,
}

/// OpenAPI schema for [`crate::domain::Experience`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Experience, rename_all = "camelCase")]
pub struct ExperienceSchema {
    id: i64,
    #[schema(example = "Initech")]
    company_name: String,
    #[schema(example = "Developer")]
    role: String,
    years: i32,
    user_id: i64,
}

/// OpenAPI schema for [`crate::domain::ports::IssuedToken`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ports::IssuedToken, rename_all = "camelCase")]
pub struct IssuedTokenSchema {
    access_token: String,
    #[schema(example = "bearer")]
    token_type: String,
    /// Lifetime in seconds.
    #[schema(example = 3600)]
    expires_in: i64,
}

/// Acknowledgement returned by association mutations.
#[derive(ToSchema)]
pub struct MessageSchema {
    #[schema(example = "Skill added to user")]
    message: String,
}

/// Result of clearing a posting's skills.
#[derive(ToSchema)]
pub struct ClearedSkillsSchema {
    #[schema(example = "Removed 3 skills from job posting")]
    message: String,
    #[schema(example = 3)]
    removed: u64,
}
