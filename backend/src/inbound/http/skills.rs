//! Skill catalogue handlers.
//!
//! ```text
//! POST   /api/v1/skills        (admin)
//! GET    /api/v1/skills        (public)
//! DELETE /api/v1/skills/{id}   (admin)
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Principal, Skill, SkillId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, SkillSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require};

/// Request body for `POST /api/v1/skills`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct SkillRequest {
    #[schema(example = "Python")]
    pub name: Option<String>,
}

/// Add a skill to the catalogue.
#[utoipa::path(
    post,
    path = "/api/v1/skills",
    request_body = SkillRequest,
    responses(
        (status = 201, description = "Skill created", body = SkillSchema),
        (status = 400, description = "Invalid request or skill already exists", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Admins only", body = ErrorSchema)
    ),
    tags = ["skills"],
    operation_id = "createSkill"
)]
#[post("/skills")]
pub async fn create_skill(
    state: web::Data<HttpState>,
    principal: Principal,
    payload: web::Json<SkillRequest>,
) -> ApiResult<HttpResponse> {
    principal.require_admin()?;
    let name = require(payload.into_inner().name, FieldName::new("name"))?;
    let skill = state.skills.create(name).await?;
    Ok(HttpResponse::Created().json(skill))
}

/// List the catalogue ordered by id.
#[utoipa::path(
    get,
    path = "/api/v1/skills",
    responses(
        (status = 200, description = "Skills", body = [SkillSchema]),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["skills"],
    operation_id = "listSkills",
    security([])
)]
#[get("/skills")]
pub async fn list_skills(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Skill>>> {
    Ok(web::Json(state.skills.list().await?))
}

/// Remove a skill and every link to it.
#[utoipa::path(
    delete,
    path = "/api/v1/skills/{id}",
    params(("id" = i64, Path, description = "Skill identifier")),
    responses(
        (status = 200, description = "Deleted skill", body = SkillSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Admins only", body = ErrorSchema),
        (status = 404, description = "Skill not found", body = ErrorSchema)
    ),
    tags = ["skills"],
    operation_id = "deleteSkill"
)]
#[delete("/skills/{id}")]
pub async fn delete_skill(
    state: web::Data<HttpState>,
    principal: Principal,
    path: web::Path<SkillId>,
) -> ApiResult<web::Json<Skill>> {
    principal.require_admin()?;
    Ok(web::Json(state.skills.delete(path.into_inner()).await?))
}
