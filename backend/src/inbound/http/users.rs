//! Candidate account handlers, including the user's skills and
//! applications.
//!
//! ```text
//! POST   /api/v1/users                          (public)
//! GET    /api/v1/users                          (admin)
//! GET    /api/v1/users/me                       (user)
//! PUT    /api/v1/users/{id}                     (self or admin)
//! DELETE /api/v1/users/{id}                     (self or admin)
//! POST   /api/v1/users/{id}/skills/{skillId}    (self or admin)
//! DELETE /api/v1/users/{id}/skills/{skillId}    (self or admin)
//! GET    /api/v1/users/{id}/skills              (authenticated)
//! GET    /api/v1/users/{id}/applications        (authenticated)
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    Error, JobPosting, Principal, Role, Skill, SkillId, User, UserDraft, UserId, UserPatch,
};
use crate::inbound::http::schemas::{
    ErrorSchema, JobPostingSchema, MessageSchema, SkillSchema, UserSchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require};
use crate::inbound::http::{ApiResult, Message};

/// Request body for `POST /api/v1/users` and `PUT /api/v1/users/{id}`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    pub national_id: Option<String>,
    #[schema(example = "ada@example.org")]
    pub email: Option<String>,
    pub phone: Option<String>,
    #[schema(example = "Engineering")]
    pub work_area: Option<String>,
    #[schema(example = "University")]
    pub education_level: Option<String>,
    pub password: Option<String>,
}

impl TryFrom<UserRequest> for UserDraft {
    type Error = Error;

    fn try_from(value: UserRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: require(value.name, FieldName::new("name"))?,
            national_id: require(value.national_id, FieldName::new("nationalId"))?,
            email: require(value.email, FieldName::new("email"))?,
            phone: require(value.phone, FieldName::new("phone"))?,
            work_area: require(value.work_area, FieldName::new("workArea"))?,
            education_level: require(value.education_level, FieldName::new("educationLevel"))?,
            password: require(value.password, FieldName::new("password"))?,
        })
    }
}

impl From<UserRequest> for UserPatch {
    fn from(value: UserRequest) -> Self {
        Self {
            name: value.name,
            national_id: value.national_id,
            email: value.email,
            phone: value.phone,
            work_area: value.work_area,
            education_level: value.education_level,
            password: value.password,
        }
    }
}

/// Register a candidate account.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = UserSchema),
        (status = 400, description = "Invalid request or already registered", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser",
    security([])
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequest>,
) -> ApiResult<HttpResponse> {
    let draft = UserDraft::try_from(payload.into_inner())?;
    let user = state.users.register(draft).await?;
    Ok(HttpResponse::Created().json(user))
}

/// List every candidate.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Users", body = [UserSchema]),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Admins only", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
    principal: Principal,
) -> ApiResult<web::Json<Vec<User>>> {
    principal.require_admin()?;
    Ok(web::Json(state.users.list().await?))
}

/// Fetch the user named by the bearer token.
#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    responses(
        (status = 200, description = "Current user", body = UserSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Users only", body = ErrorSchema),
        (status = 404, description = "Account no longer exists", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "currentUser"
)]
#[get("/users/me")]
pub async fn current_user(
    state: web::Data<HttpState>,
    principal: Principal,
) -> ApiResult<web::Json<User>> {
    principal.require_role(Role::User)?;
    Ok(web::Json(state.users.get_by_email(principal.email()).await?))
}

/// Update a user; omitted fields keep their value.
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "Updated user", body = UserSchema),
        (status = 400, description = "Invalid request or already registered", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Not this user", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    principal: Principal,
    path: web::Path<UserId>,
    payload: web::Json<UserRequest>,
) -> ApiResult<web::Json<User>> {
    let user_id = path.into_inner();
    principal.require_user_or_admin(user_id)?;
    let patch = UserPatch::from(payload.into_inner());
    Ok(web::Json(state.users.update(user_id, patch).await?))
}

/// Delete a user with their experiences, skills, and applications.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Deleted user", body = UserSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Not this user", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    principal: Principal,
    path: web::Path<UserId>,
) -> ApiResult<web::Json<User>> {
    let user_id = path.into_inner();
    principal.require_user_or_admin(user_id)?;
    Ok(web::Json(state.users.delete(user_id).await?))
}

/// Give a user a skill.
#[utoipa::path(
    post,
    path = "/api/v1/users/{id}/skills/{skill_id}",
    params(
        ("id" = i64, Path, description = "User identifier"),
        ("skill_id" = i64, Path, description = "Skill identifier")
    ),
    responses(
        (status = 200, description = "Skill added", body = MessageSchema),
        (status = 400, description = "User already has this skill", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Not this user", body = ErrorSchema),
        (status = 404, description = "User or skill not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "addUserSkill"
)]
#[post("/users/{id}/skills/{skill_id}")]
pub async fn add_user_skill(
    state: web::Data<HttpState>,
    principal: Principal,
    path: web::Path<(UserId, SkillId)>,
) -> ApiResult<web::Json<Message>> {
    let (user_id, skill_id) = path.into_inner();
    principal.require_user_or_admin(user_id)?;
    state.associations.add_user_skill(user_id, skill_id).await?;
    Ok(Message::json("Skill added to user"))
}

/// Take a skill away from a user.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}/skills/{skill_id}",
    params(
        ("id" = i64, Path, description = "User identifier"),
        ("skill_id" = i64, Path, description = "Skill identifier")
    ),
    responses(
        (status = 200, description = "Skill removed", body = MessageSchema),
        (status = 400, description = "User does not have this skill", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Not this user", body = ErrorSchema),
        (status = 404, description = "User or skill not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "removeUserSkill"
)]
#[delete("/users/{id}/skills/{skill_id}")]
pub async fn remove_user_skill(
    state: web::Data<HttpState>,
    principal: Principal,
    path: web::Path<(UserId, SkillId)>,
) -> ApiResult<web::Json<Message>> {
    let (user_id, skill_id) = path.into_inner();
    principal.require_user_or_admin(user_id)?;
    state
        .associations
        .remove_user_skill(user_id, skill_id)
        .await?;
    Ok(Message::json("Skill removed from user"))
}

/// Skills held by a user, ordered by id.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/skills",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User skills", body = [SkillSchema]),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUserSkills"
)]
#[get("/users/{id}/skills")]
pub async fn list_user_skills(
    state: web::Data<HttpState>,
    _principal: Principal,
    path: web::Path<UserId>,
) -> ApiResult<web::Json<Vec<Skill>>> {
    Ok(web::Json(
        state.associations.list_user_skills(path.into_inner()).await?,
    ))
}

/// Job postings a user applied to, ordered by id.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/applications",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Applied job postings", body = [JobPostingSchema]),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUserApplications"
)]
#[get("/users/{id}/applications")]
pub async fn list_user_applications(
    state: web::Data<HttpState>,
    _principal: Principal,
    path: web::Path<UserId>,
) -> ApiResult<web::Json<Vec<JobPosting>>> {
    Ok(web::Json(
        state
            .associations
            .list_user_applications(path.into_inner())
            .await?,
    ))
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
