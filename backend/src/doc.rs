//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every handler under `/api/v1`, the health probes,
//! the schema wrappers from [`crate::inbound::http::schemas`] and the bearer
//! token security scheme. Swagger UI serves it in debug builds and
//! `cargo run --bin openapi-dump` writes it out for tooling.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::admins::AdminRequest;
use crate::inbound::http::auth::TokenRequest;
use crate::inbound::http::companies::CompanyRequest;
use crate::inbound::http::experiences::{ExperienceRequest, ExperienceUpdateRequest};
use crate::inbound::http::jobs::JobPostingRequest;
use crate::inbound::http::schemas::{
    AdminSchema, ClearedSkillsSchema, CompanySchema, ErrorCodeSchema, ErrorSchema,
    ExperienceSchema, IssuedTokenSchema, JobPostingSchema, JobPostingWithApplicantsSchema,
    MessageSchema, SkillSchema, UserSchema,
};
use crate::inbound::http::skills::SkillRequest;
use crate::inbound::http::users::UserRequest;

/// Name of the bearer security scheme referenced by protected operations.
pub const BEARER_SCHEME: &str = "BearerAuth";

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        let scheme = HttpBuilder::new()
            .scheme(HttpAuthScheme::Bearer)
            .bearer_format("JWT")
            .description(Some("Access token issued by POST /api/v1/auth/token."))
            .build();
        components.add_security_scheme(BEARER_SCHEME, SecurityScheme::Http(scheme));
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Jobscout API",
        description = "Job board: admins publish companies and postings, candidates apply."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BearerAuth" = [])),
    paths(
        crate::inbound::http::auth::issue_token,
        crate::inbound::http::admins::create_admin,
        crate::inbound::http::admins::list_admins,
        crate::inbound::http::admins::current_admin,
        crate::inbound::http::admins::update_admin,
        crate::inbound::http::admins::delete_admin,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::current_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::users::add_user_skill,
        crate::inbound::http::users::remove_user_skill,
        crate::inbound::http::users::list_user_skills,
        crate::inbound::http::users::list_user_applications,
        crate::inbound::http::companies::create_company,
        crate::inbound::http::companies::list_companies,
        crate::inbound::http::companies::list_companies_by_admin,
        crate::inbound::http::companies::get_company,
        crate::inbound::http::companies::update_company,
        crate::inbound::http::companies::delete_company,
        crate::inbound::http::jobs::list_jobs_with_applicants,
        crate::inbound::http::jobs::create_job,
        crate::inbound::http::jobs::list_jobs,
        crate::inbound::http::jobs::list_jobs_by_company,
        crate::inbound::http::jobs::list_jobs_by_admin,
        crate::inbound::http::jobs::get_job,
        crate::inbound::http::jobs::update_job,
        crate::inbound::http::jobs::delete_job,
        crate::inbound::http::jobs::apply_to_job,
        crate::inbound::http::jobs::list_job_applicants,
        crate::inbound::http::jobs::add_job_skill,
        crate::inbound::http::jobs::remove_job_skill,
        crate::inbound::http::jobs::clear_job_skills,
        crate::inbound::http::jobs::list_job_skills,
        crate::inbound::http::skills::create_skill,
        crate::inbound::http::skills::list_skills,
        crate::inbound::http::skills::delete_skill,
        crate::inbound::http::experiences::create_experience,
        crate::inbound::http::experiences::list_user_experiences,
        crate::inbound::http::experiences::update_experience,
        crate::inbound::http::experiences::delete_experience,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        AdminSchema,
        UserSchema,
        CompanySchema,
        JobPostingSchema,
        JobPostingWithApplicantsSchema,
        SkillSchema,
        ExperienceSchema,
        IssuedTokenSchema,
        MessageSchema,
        ClearedSkillsSchema,
        TokenRequest,
        AdminRequest,
        UserRequest,
        CompanyRequest,
        JobPostingRequest,
        SkillRequest,
        ExperienceRequest,
        ExperienceUpdateRequest,
    )),
    tags(
        (name = "auth", description = "Bearer token issuance"),
        (name = "admins", description = "Administrator accounts"),
        (name = "users", description = "Candidate accounts, skills and applications"),
        (name = "companies", description = "Employers owned by admins"),
        (name = "jobs", description = "Job postings, required skills and applicants"),
        (name = "skills", description = "Skill catalogue"),
        (name = "experiences", description = "Candidate work history"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
