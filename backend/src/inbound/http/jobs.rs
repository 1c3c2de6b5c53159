//! Job posting handlers, including required skills and applications.
//!
//! ```text
//! GET    /api/v1/jobs/with-applicants           (admin, own companies)
//! POST   /api/v1/jobs                           (admin)
//! GET    /api/v1/jobs                           (public)
//! GET    /api/v1/jobs/company/{companyId}       (public)
//! GET    /api/v1/jobs/admin/{adminId}           (public)
//! GET    /api/v1/jobs/{id}                      (public)
//! PUT    /api/v1/jobs/{id}                      (admin)
//! DELETE /api/v1/jobs/{id}                      (admin)
//! POST   /api/v1/jobs/{id}/apply/{userId}       (self or admin)
//! GET    /api/v1/jobs/{id}/applicants           (admin)
//! POST   /api/v1/jobs/{id}/skills/{skillId}     (admin)
//! DELETE /api/v1/jobs/{id}/skills/{skillId}     (admin)
//! DELETE /api/v1/jobs/{id}/skills               (admin)
//! GET    /api/v1/jobs/{id}/skills               (public)
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    AdminId, CompanyId, Error, JobPosting, JobPostingDraft, JobPostingId, JobPostingPatch,
    JobPostingWithApplicants, Principal, Skill, SkillId, User, UserId,
};
use crate::inbound::http::schemas::{
    ClearedSkillsSchema, ErrorSchema, JobPostingSchema, JobPostingWithApplicantsSchema,
    MessageSchema, SkillSchema, UserSchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, optional_id, require, require_id};
use crate::inbound::http::{ApiResult, Message};

const COMPANY_ID: FieldName = FieldName::new("companyId");

/// Request body for `POST /api/v1/jobs` and `PUT /api/v1/jobs/{id}`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobPostingRequest {
    #[schema(example = "Backend Engineer")]
    pub title: Option<String>,
    pub description: Option<String>,
    #[schema(example = "remote")]
    pub work_mode: Option<String>,
    #[schema(example = 9000.0)]
    pub salary: Option<f64>,
    #[schema(example = 2)]
    pub openings: Option<i32>,
    /// Owning company; must reference an existing company.
    #[schema(example = 1)]
    pub company_id: Option<i64>,
}

impl TryFrom<JobPostingRequest> for JobPostingDraft {
    type Error = Error;

    fn try_from(value: JobPostingRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            title: require(value.title, FieldName::new("title"))?,
            description: require(value.description, FieldName::new("description"))?,
            work_mode: require(value.work_mode, FieldName::new("workMode"))?,
            salary: require(value.salary, FieldName::new("salary"))?,
            openings: require(value.openings, FieldName::new("openings"))?,
            company_id: require_id(value.company_id, COMPANY_ID)?,
        })
    }
}

impl TryFrom<JobPostingRequest> for JobPostingPatch {
    type Error = Error;

    fn try_from(value: JobPostingRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            title: value.title,
            description: value.description,
            work_mode: value.work_mode,
            salary: value.salary,
            openings: value.openings,
            company_id: optional_id(value.company_id, COMPANY_ID)?,
        })
    }
}

/// Response body for `DELETE /api/v1/jobs/{id}/skills`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClearedSkills {
    pub message: String,
    pub removed: usize,
}

/// Postings of the caller's companies with everyone who applied.
#[utoipa::path(
    get,
    path = "/api/v1/jobs/with-applicants",
    responses(
        (status = 200, description = "Postings with applicants", body = [JobPostingWithApplicantsSchema]),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Admins only", body = ErrorSchema),
        (status = 404, description = "Admin not found", body = ErrorSchema)
    ),
    tags = ["jobs"],
    operation_id = "listJobsWithApplicants"
)]
#[get("/jobs/with-applicants")]
pub async fn list_jobs_with_applicants(
    state: web::Data<HttpState>,
    principal: Principal,
) -> ApiResult<web::Json<Vec<JobPostingWithApplicants>>> {
    let admin_id = principal.require_admin()?;
    Ok(web::Json(
        state.associations.list_jobs_with_applicants(admin_id).await?,
    ))
}

/// Publish a job posting for an existing company.
#[utoipa::path(
    post,
    path = "/api/v1/jobs",
    request_body = JobPostingRequest,
    responses(
        (status = 201, description = "Job posting created", body = JobPostingSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Admins only", body = ErrorSchema),
        (status = 404, description = "Company not found", body = ErrorSchema)
    ),
    tags = ["jobs"],
    operation_id = "createJob"
)]
#[post("/jobs")]
pub async fn create_job(
    state: web::Data<HttpState>,
    principal: Principal,
    payload: web::Json<JobPostingRequest>,
) -> ApiResult<HttpResponse> {
    principal.require_admin()?;
    let draft = JobPostingDraft::try_from(payload.into_inner())?;
    let posting = state.jobs.create(draft).await?;
    Ok(HttpResponse::Created().json(posting))
}

/// List every job posting.
#[utoipa::path(
    get,
    path = "/api/v1/jobs",
    responses(
        (status = 200, description = "Job postings", body = [JobPostingSchema]),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["jobs"],
    operation_id = "listJobs",
    security([])
)]
#[get("/jobs")]
pub async fn list_jobs(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<JobPosting>>> {
    Ok(web::Json(state.jobs.list().await?))
}

/// Postings of one company.
#[utoipa::path(
    get,
    path = "/api/v1/jobs/company/{company_id}",
    params(("company_id" = i64, Path, description = "Company identifier")),
    responses(
        (status = 200, description = "Postings of the company", body = [JobPostingSchema]),
        (status = 404, description = "Company not found", body = ErrorSchema)
    ),
    tags = ["jobs"],
    operation_id = "listJobsByCompany",
    security([])
)]
#[get("/jobs/company/{company_id}")]
pub async fn list_jobs_by_company(
    state: web::Data<HttpState>,
    path: web::Path<CompanyId>,
) -> ApiResult<web::Json<Vec<JobPosting>>> {
    Ok(web::Json(state.jobs.list_by_company(path.into_inner()).await?))
}

/// Postings across every company of one admin.
#[utoipa::path(
    get,
    path = "/api/v1/jobs/admin/{admin_id}",
    params(("admin_id" = i64, Path, description = "Admin identifier")),
    responses(
        (status = 200, description = "Postings of the admin", body = [JobPostingSchema]),
        (status = 404, description = "Admin not found", body = ErrorSchema)
    ),
    tags = ["jobs"],
    operation_id = "listJobsByAdmin",
    security([])
)]
#[get("/jobs/admin/{admin_id}")]
pub async fn list_jobs_by_admin(
    state: web::Data<HttpState>,
    path: web::Path<AdminId>,
) -> ApiResult<web::Json<Vec<JobPosting>>> {
    Ok(web::Json(state.jobs.list_by_admin(path.into_inner()).await?))
}

/// Fetch one job posting.
#[utoipa::path(
    get,
    path = "/api/v1/jobs/{id}",
    params(("id" = i64, Path, description = "Job posting identifier")),
    responses(
        (status = 200, description = "Job posting", body = JobPostingSchema),
        (status = 404, description = "Job posting not found", body = ErrorSchema)
    ),
    tags = ["jobs"],
    operation_id = "getJob",
    security([])
)]
#[get("/jobs/{id}")]
pub async fn get_job(
    state: web::Data<HttpState>,
    path: web::Path<JobPostingId>,
) -> ApiResult<web::Json<JobPosting>> {
    Ok(web::Json(state.jobs.get(path.into_inner()).await?))
}

/// Update a job posting; omitted fields keep their value.
#[utoipa::path(
    put,
    path = "/api/v1/jobs/{id}",
    params(("id" = i64, Path, description = "Job posting identifier")),
    request_body = JobPostingRequest,
    responses(
        (status = 200, description = "Updated job posting", body = JobPostingSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Admins only", body = ErrorSchema),
        (status = 404, description = "Job posting or company not found", body = ErrorSchema)
    ),
    tags = ["jobs"],
    operation_id = "updateJob"
)]
#[put("/jobs/{id}")]
pub async fn update_job(
    state: web::Data<HttpState>,
    principal: Principal,
    path: web::Path<JobPostingId>,
    payload: web::Json<JobPostingRequest>,
) -> ApiResult<web::Json<JobPosting>> {
    principal.require_admin()?;
    let patch = JobPostingPatch::try_from(payload.into_inner())?;
    Ok(web::Json(state.jobs.update(path.into_inner(), patch).await?))
}

/// Delete a job posting with its skill links and applications.
#[utoipa::path(
    delete,
    path = "/api/v1/jobs/{id}",
    params(("id" = i64, Path, description = "Job posting identifier")),
    responses(
        (status = 200, description = "Deleted job posting", body = JobPostingSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Admins only", body = ErrorSchema),
        (status = 404, description = "Job posting not found", body = ErrorSchema)
    ),
    tags = ["jobs"],
    operation_id = "deleteJob"
)]
#[delete("/jobs/{id}")]
pub async fn delete_job(
    state: web::Data<HttpState>,
    principal: Principal,
    path: web::Path<JobPostingId>,
) -> ApiResult<web::Json<JobPosting>> {
    principal.require_admin()?;
    Ok(web::Json(state.jobs.delete(path.into_inner()).await?))
}

/// Record a user's application to a posting.
#[utoipa::path(
    post,
    path = "/api/v1/jobs/{id}/apply/{user_id}",
    params(
        ("id" = i64, Path, description = "Job posting identifier"),
        ("user_id" = i64, Path, description = "Applying user")
    ),
    responses(
        (status = 200, description = "Application recorded", body = MessageSchema),
        (status = 400, description = "User already applied", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Not this user", body = ErrorSchema),
        (status = 404, description = "Job posting or user not found", body = ErrorSchema)
    ),
    tags = ["jobs"],
    operation_id = "applyToJob"
)]
#[post("/jobs/{id}/apply/{user_id}")]
pub async fn apply_to_job(
    state: web::Data<HttpState>,
    principal: Principal,
    path: web::Path<(JobPostingId, UserId)>,
) -> ApiResult<web::Json<Message>> {
    let (job_id, user_id) = path.into_inner();
    principal.require_user_or_admin(user_id)?;
    state.associations.apply(job_id, user_id).await?;
    Ok(Message::json("Application recorded"))
}

/// Users who applied to a posting, ordered by id.
#[utoipa::path(
    get,
    path = "/api/v1/jobs/{id}/applicants",
    params(("id" = i64, Path, description = "Job posting identifier")),
    responses(
        (status = 200, description = "Applicants", body = [UserSchema]),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Admins only", body = ErrorSchema),
        (status = 404, description = "Job posting not found", body = ErrorSchema)
    ),
    tags = ["jobs"],
    operation_id = "listJobApplicants"
)]
#[get("/jobs/{id}/applicants")]
pub async fn list_job_applicants(
    state: web::Data<HttpState>,
    principal: Principal,
    path: web::Path<JobPostingId>,
) -> ApiResult<web::Json<Vec<User>>> {
    principal.require_admin()?;
    Ok(web::Json(
        state
            .associations
            .list_job_applicants(path.into_inner())
            .await?,
    ))
}

/// Require a skill for a posting.
#[utoipa::path(
    post,
    path = "/api/v1/jobs/{id}/skills/{skill_id}",
    params(
        ("id" = i64, Path, description = "Job posting identifier"),
        ("skill_id" = i64, Path, description = "Skill identifier")
    ),
    responses(
        (status = 200, description = "Skill added", body = MessageSchema),
        (status = 400, description = "Posting already requires this skill", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Admins only", body = ErrorSchema),
        (status = 404, description = "Job posting or skill not found", body = ErrorSchema)
    ),
    tags = ["jobs"],
    operation_id = "addJobSkill"
)]
#[post("/jobs/{id}/skills/{skill_id}")]
pub async fn add_job_skill(
    state: web::Data<HttpState>,
    principal: Principal,
    path: web::Path<(JobPostingId, SkillId)>,
) -> ApiResult<web::Json<Message>> {
    principal.require_admin()?;
    let (job_id, skill_id) = path.into_inner();
    state.associations.add_job_skill(job_id, skill_id).await?;
    Ok(Message::json("Skill added to job posting"))
}

/// Stop requiring a skill for a posting.
#[utoipa::path(
    delete,
    path = "/api/v1/jobs/{id}/skills/{skill_id}",
    params(
        ("id" = i64, Path, description = "Job posting identifier"),
        ("skill_id" = i64, Path, description = "Skill identifier")
    ),
    responses(
        (status = 200, description = "Skill removed", body = MessageSchema),
        (status = 400, description = "Posting does not require this skill", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Admins only", body = ErrorSchema),
        (status = 404, description = "Job posting or skill not found", body = ErrorSchema)
    ),
    tags = ["jobs"],
    operation_id = "removeJobSkill"
)]
#[delete("/jobs/{id}/skills/{skill_id}")]
pub async fn remove_job_skill(
    state: web::Data<HttpState>,
    principal: Principal,
    path: web::Path<(JobPostingId, SkillId)>,
) -> ApiResult<web::Json<Message>> {
    principal.require_admin()?;
    let (job_id, skill_id) = path.into_inner();
    state.associations.remove_job_skill(job_id, skill_id).await?;
    Ok(Message::json("Skill removed from job posting"))
}

/// Remove every required skill from a posting.
#[utoipa::path(
    delete,
    path = "/api/v1/jobs/{id}/skills",
    params(("id" = i64, Path, description = "Job posting identifier")),
    responses(
        (status = 200, description = "Skills cleared", body = ClearedSkillsSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Admins only", body = ErrorSchema),
        (status = 404, description = "Job posting not found", body = ErrorSchema)
    ),
    tags = ["jobs"],
    operation_id = "clearJobSkills"
)]
#[delete("/jobs/{id}/skills")]
pub async fn clear_job_skills(
    state: web::Data<HttpState>,
    principal: Principal,
    path: web::Path<JobPostingId>,
) -> ApiResult<web::Json<ClearedSkills>> {
    principal.require_admin()?;
    let removed = state
        .associations
        .clear_job_skills(path.into_inner())
        .await?;
    Ok(web::Json(ClearedSkills {
        message: "Skills cleared from job posting".to_owned(),
        removed,
    }))
}

/// Skills a posting requires, ordered by id.
#[utoipa::path(
    get,
    path = "/api/v1/jobs/{id}/skills",
    params(("id" = i64, Path, description = "Job posting identifier")),
    responses(
        (status = 200, description = "Required skills", body = [SkillSchema]),
        (status = 404, description = "Job posting not found", body = ErrorSchema)
    ),
    tags = ["jobs"],
    operation_id = "listJobSkills",
    security([])
)]
#[get("/jobs/{id}/skills")]
pub async fn list_job_skills(
    state: web::Data<HttpState>,
    path: web::Path<JobPostingId>,
) -> ApiResult<web::Json<Vec<Skill>>> {
    Ok(web::Json(
        state.associations.list_job_skills(path.into_inner()).await?,
    ))
}

#[cfg(test)]
#[path = "jobs_tests.rs"]
mod tests;
