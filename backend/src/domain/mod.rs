//! Domain primitives, aggregates, and services.
//!
//! Purpose: define the strongly typed entities of the job board, the ports
//! adapters plug into, and the services implementing the driving ports.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Entities: Admin, User, Company, JobPosting, Skill, Experience.
//! - Principal / Role: the authenticated caller derived from a token.
//! - Services: one per driving port in [`ports`].

pub mod admin;
mod admin_service;
mod association_service;
pub mod auth;
pub mod company;
mod company_service;
pub mod error;
pub mod experience;
mod experience_service;
pub mod ids;
pub mod job_posting;
mod job_posting_service;
mod login_service;
pub mod ports;
mod service_support;
pub mod skill;
mod skill_service;
pub mod trace_id;
pub mod user;
mod user_service;
pub mod validation;

pub use self::admin::{Admin, AdminChanges, AdminDraft, AdminPatch, AdminProfile};
pub use self::admin_service::AdminAccountService;
pub use self::association_service::AssociationService;
pub use self::auth::{
    CredentialsValidationError, LoginCredentials, Password, PasswordHash, Principal, Role,
    UnknownRole,
};
pub use self::company::{Company, CompanyChanges, CompanyDraft, CompanyPatch, NewCompany};
pub use self::company_service::CompanyService;
pub use self::error::{Error, ErrorCode};
pub use self::experience::{
    Experience, ExperienceChanges, ExperienceDraft, ExperiencePatch, NewExperience,
};
pub use self::experience_service::ExperienceService;
pub use self::ids::{AdminId, CompanyId, ExperienceId, JobPostingId, SkillId, UserId};
pub use self::job_posting::{
    JobPosting, JobPostingChanges, JobPostingDraft, JobPostingPatch, JobPostingWithApplicants,
    NewJobPosting,
};
pub use self::job_posting_service::JobPostingService;
pub use self::login_service::CredentialLoginService;
pub use self::skill::{NewSkill, Skill};
pub use self::skill_service::SkillService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserChanges, UserDraft, UserPatch, UserProfile};
pub use self::user_service::UserAccountService;
pub use self::validation::ValidationError;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use jobscout::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("Admins only"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
