//! Company handlers.
//!
//! ```text
//! POST   /api/v1/companies                  (admin)
//! GET    /api/v1/companies                  (public)
//! GET    /api/v1/companies/admin/{adminId}  (public)
//! GET    /api/v1/companies/{id}             (public)
//! PUT    /api/v1/companies/{id}             (admin)
//! DELETE /api/v1/companies/{id}             (admin)
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{AdminId, Company, CompanyDraft, CompanyId, CompanyPatch, Error, Principal};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{CompanySchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, optional_id, require, require_id};

const ADMIN_ID: FieldName = FieldName::new("adminId");

/// Request body for `POST /api/v1/companies` and `PUT /api/v1/companies/{id}`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRequest {
    #[schema(example = "Acme Ltd")]
    pub name: Option<String>,
    pub description: Option<String>,
    #[schema(example = "Recife")]
    pub city: Option<String>,
    #[schema(example = "50000-000")]
    pub postal_code: Option<String>,
    #[schema(example = 40)]
    pub employee_count: Option<i32>,
    #[schema(example = 7)]
    pub years_active: Option<i32>,
    /// Owning admin; must reference an existing admin.
    #[schema(example = 1)]
    pub admin_id: Option<i64>,
}

impl TryFrom<CompanyRequest> for CompanyDraft {
    type Error = Error;

    fn try_from(value: CompanyRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: require(value.name, FieldName::new("name"))?,
            description: require(value.description, FieldName::new("description"))?,
            city: require(value.city, FieldName::new("city"))?,
            postal_code: require(value.postal_code, FieldName::new("postalCode"))?,
            employee_count: require(value.employee_count, FieldName::new("employeeCount"))?,
            years_active: require(value.years_active, FieldName::new("yearsActive"))?,
            admin_id: require_id(value.admin_id, ADMIN_ID)?,
        })
    }
}

impl TryFrom<CompanyRequest> for CompanyPatch {
    type Error = Error;

    fn try_from(value: CompanyRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: value.name,
            description: value.description,
            city: value.city,
            postal_code: value.postal_code,
            employee_count: value.employee_count,
            years_active: value.years_active,
            admin_id: optional_id(value.admin_id, ADMIN_ID)?,
        })
    }
}

/// Create a company owned by an existing admin.
#[utoipa::path(
    post,
    path = "/api/v1/companies",
    request_body = CompanyRequest,
    responses(
        (status = 201, description = "Company created", body = CompanySchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Admins only", body = ErrorSchema),
        (status = 404, description = "Admin not found", body = ErrorSchema)
    ),
    tags = ["companies"],
    operation_id = "createCompany"
)]
#[post("/companies")]
pub async fn create_company(
    state: web::Data<HttpState>,
    principal: Principal,
    payload: web::Json<CompanyRequest>,
) -> ApiResult<HttpResponse> {
    principal.require_admin()?;
    let draft = CompanyDraft::try_from(payload.into_inner())?;
    let company = state.companies.create(draft).await?;
    Ok(HttpResponse::Created().json(company))
}

/// List every company.
#[utoipa::path(
    get,
    path = "/api/v1/companies",
    responses(
        (status = 200, description = "Companies", body = [CompanySchema]),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["companies"],
    operation_id = "listCompanies",
    security([])
)]
#[get("/companies")]
pub async fn list_companies(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Company>>> {
    Ok(web::Json(state.companies.list().await?))
}

/// Companies owned by one admin.
#[utoipa::path(
    get,
    path = "/api/v1/companies/admin/{admin_id}",
    params(("admin_id" = i64, Path, description = "Admin identifier")),
    responses(
        (status = 200, description = "Companies of the admin", body = [CompanySchema]),
        (status = 404, description = "Admin not found", body = ErrorSchema)
    ),
    tags = ["companies"],
    operation_id = "listCompaniesByAdmin",
    security([])
)]
#[get("/companies/admin/{admin_id}")]
pub async fn list_companies_by_admin(
    state: web::Data<HttpState>,
    path: web::Path<AdminId>,
) -> ApiResult<web::Json<Vec<Company>>> {
    Ok(web::Json(
        state.companies.list_by_admin(path.into_inner()).await?,
    ))
}

/// Fetch one company.
#[utoipa::path(
    get,
    path = "/api/v1/companies/{id}",
    params(("id" = i64, Path, description = "Company identifier")),
    responses(
        (status = 200, description = "Company", body = CompanySchema),
        (status = 404, description = "Company not found", body = ErrorSchema)
    ),
    tags = ["companies"],
    operation_id = "getCompany",
    security([])
)]
#[get("/companies/{id}")]
pub async fn get_company(
    state: web::Data<HttpState>,
    path: web::Path<CompanyId>,
) -> ApiResult<web::Json<Company>> {
    Ok(web::Json(state.companies.get(path.into_inner()).await?))
}

/// Update a company; omitted fields keep their value.
#[utoipa::path(
    put,
    path = "/api/v1/companies/{id}",
    params(("id" = i64, Path, description = "Company identifier")),
    request_body = CompanyRequest,
    responses(
        (status = 200, description = "Updated company", body = CompanySchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Admins only", body = ErrorSchema),
        (status = 404, description = "Company or admin not found", body = ErrorSchema)
    ),
    tags = ["companies"],
    operation_id = "updateCompany"
)]
#[put("/companies/{id}")]
pub async fn update_company(
    state: web::Data<HttpState>,
    principal: Principal,
    path: web::Path<CompanyId>,
    payload: web::Json<CompanyRequest>,
) -> ApiResult<web::Json<Company>> {
    principal.require_admin()?;
    let patch = CompanyPatch::try_from(payload.into_inner())?;
    Ok(web::Json(
        state.companies.update(path.into_inner(), patch).await?,
    ))
}

/// Delete a company that no longer has job postings.
#[utoipa::path(
    delete,
    path = "/api/v1/companies/{id}",
    params(("id" = i64, Path, description = "Company identifier")),
    responses(
        (status = 200, description = "Deleted company", body = CompanySchema),
        (status = 400, description = "Company still has job postings", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Admins only", body = ErrorSchema),
        (status = 404, description = "Company not found", body = ErrorSchema)
    ),
    tags = ["companies"],
    operation_id = "deleteCompany"
)]
#[delete("/companies/{id}")]
pub async fn delete_company(
    state: web::Data<HttpState>,
    principal: Principal,
    path: web::Path<CompanyId>,
) -> ApiResult<web::Json<Company>> {
    principal.require_admin()?;
    Ok(web::Json(state.companies.delete(path.into_inner()).await?))
}
