//! Admin account handlers.
//!
//! ```text
//! POST   /api/v1/admins          (public)
//! GET    /api/v1/admins          (admin)
//! GET    /api/v1/admins/me       (admin)
//! PUT    /api/v1/admins/{id}     (admin)
//! DELETE /api/v1/admins/{id}     (admin)
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Admin, AdminDraft, AdminId, AdminPatch, Error, Principal};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{AdminSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require};

/// Request body for `POST /api/v1/admins`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminRequest {
    #[schema(example = "Grace Hopper")]
    pub name: Option<String>,
    #[schema(example = "123.456.789-09")]
    pub national_id: Option<String>,
    #[schema(example = "grace@example.org")]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

impl TryFrom<AdminRequest> for AdminDraft {
    type Error = Error;

    fn try_from(value: AdminRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: require(value.name, FieldName::new("name"))?,
            national_id: require(value.national_id, FieldName::new("nationalId"))?,
            email: require(value.email, FieldName::new("email"))?,
            phone: require(value.phone, FieldName::new("phone"))?,
            password: require(value.password, FieldName::new("password"))?,
        })
    }
}

impl From<AdminRequest> for AdminPatch {
    fn from(value: AdminRequest) -> Self {
        Self {
            name: value.name,
            national_id: value.national_id,
            email: value.email,
            phone: value.phone,
            password: value.password,
        }
    }
}

/// Register an admin account.
#[utoipa::path(
    post,
    path = "/api/v1/admins",
    request_body = AdminRequest,
    responses(
        (status = 201, description = "Admin created", body = AdminSchema),
        (status = 400, description = "Invalid request or already registered", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["admins"],
    operation_id = "createAdmin",
    security([])
)]
#[post("/admins")]
pub async fn create_admin(
    state: web::Data<HttpState>,
    payload: web::Json<AdminRequest>,
) -> ApiResult<HttpResponse> {
    let draft = AdminDraft::try_from(payload.into_inner())?;
    let admin = state.admins.register(draft).await?;
    Ok(HttpResponse::Created().json(admin))
}

/// List every admin.
#[utoipa::path(
    get,
    path = "/api/v1/admins",
    responses(
        (status = 200, description = "Admins", body = [AdminSchema]),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Admins only", body = ErrorSchema)
    ),
    tags = ["admins"],
    operation_id = "listAdmins"
)]
#[get("/admins")]
pub async fn list_admins(
    state: web::Data<HttpState>,
    principal: Principal,
) -> ApiResult<web::Json<Vec<Admin>>> {
    principal.require_admin()?;
    Ok(web::Json(state.admins.list().await?))
}

/// Fetch the admin named by the bearer token.
#[utoipa::path(
    get,
    path = "/api/v1/admins/me",
    responses(
        (status = 200, description = "Current admin", body = AdminSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Admins only", body = ErrorSchema),
        (status = 404, description = "Account no longer exists", body = ErrorSchema)
    ),
    tags = ["admins"],
    operation_id = "currentAdmin"
)]
#[get("/admins/me")]
pub async fn current_admin(
    state: web::Data<HttpState>,
    principal: Principal,
) -> ApiResult<web::Json<Admin>> {
    principal.require_admin()?;
    Ok(web::Json(state.admins.get_by_email(principal.email()).await?))
}

/// Update an admin; omitted fields keep their value.
#[utoipa::path(
    put,
    path = "/api/v1/admins/{id}",
    params(("id" = i64, Path, description = "Admin identifier")),
    request_body = AdminRequest,
    responses(
        (status = 200, description = "Updated admin", body = AdminSchema),
        (status = 400, description = "Invalid request or already registered", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Admins only", body = ErrorSchema),
        (status = 404, description = "Admin not found", body = ErrorSchema)
    ),
    tags = ["admins"],
    operation_id = "updateAdmin"
)]
#[put("/admins/{id}")]
pub async fn update_admin(
    state: web::Data<HttpState>,
    principal: Principal,
    path: web::Path<AdminId>,
    payload: web::Json<AdminRequest>,
) -> ApiResult<web::Json<Admin>> {
    principal.require_admin()?;
    let patch = AdminPatch::from(payload.into_inner());
    Ok(web::Json(state.admins.update(path.into_inner(), patch).await?))
}

/// Delete an admin that no longer owns companies.
#[utoipa::path(
    delete,
    path = "/api/v1/admins/{id}",
    params(("id" = i64, Path, description = "Admin identifier")),
    responses(
        (status = 200, description = "Deleted admin", body = AdminSchema),
        (status = 400, description = "Admin still owns companies", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Admins only", body = ErrorSchema),
        (status = 404, description = "Admin not found", body = ErrorSchema)
    ),
    tags = ["admins"],
    operation_id = "deleteAdmin"
)]
#[delete("/admins/{id}")]
pub async fn delete_admin(
    state: web::Data<HttpState>,
    principal: Principal,
    path: web::Path<AdminId>,
) -> ApiResult<web::Json<Admin>> {
    principal.require_admin()?;
    Ok(web::Json(state.admins.delete(path.into_inner()).await?))
}

#[cfg(test)]
#[path = "admins_tests.rs"]
mod tests;
