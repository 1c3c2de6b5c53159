//! Work experience handlers.
//!
//! ```text
//! POST   /api/v1/experiences                  (self or admin)
//! GET    /api/v1/experiences/user/{userId}    (authenticated)
//! PUT    /api/v1/experiences/{id}             (owner or admin)
//! DELETE /api/v1/experiences/{id}             (owner or admin)
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    Error, Experience, ExperienceDraft, ExperienceId, ExperiencePatch, Principal, UserId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, ExperienceSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require, require_id};

/// Request body for `POST /api/v1/experiences`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRequest {
    #[schema(example = "Initech")]
    pub company_name: Option<String>,
    #[schema(example = "Developer")]
    pub role: Option<String>,
    #[schema(example = 3)]
    pub years: Option<i32>,
    #[schema(example = 1)]
    pub user_id: Option<i64>,
}

impl TryFrom<ExperienceRequest> for ExperienceDraft {
    type Error = Error;

    fn try_from(value: ExperienceRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            company_name: require(value.company_name, FieldName::new("companyName"))?,
            role: require(value.role, FieldName::new("role"))?,
            years: require(value.years, FieldName::new("years"))?,
            user_id: require_id(value.user_id, FieldName::new("userId"))?,
        })
    }
}

/// Request body for `PUT /api/v1/experiences/{id}`. The owner is fixed.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceUpdateRequest {
    pub company_name: Option<String>,
    pub role: Option<String>,
    pub years: Option<i32>,
}

impl From<ExperienceUpdateRequest> for ExperiencePatch {
    fn from(value: ExperienceUpdateRequest) -> Self {
        Self {
            company_name: value.company_name,
            role: value.role,
            years: value.years,
        }
    }
}

/// Record an experience entry for a user.
#[utoipa::path(
    post,
    path = "/api/v1/experiences",
    request_body = ExperienceRequest,
    responses(
        (status = 201, description = "Experience created", body = ExperienceSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Not this user", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema)
    ),
    tags = ["experiences"],
    operation_id = "createExperience"
)]
#[post("/experiences")]
pub async fn create_experience(
    state: web::Data<HttpState>,
    principal: Principal,
    payload: web::Json<ExperienceRequest>,
) -> ApiResult<HttpResponse> {
    let draft = ExperienceDraft::try_from(payload.into_inner())?;
    principal.require_user_or_admin(draft.user_id)?;
    let experience = state.experiences.create(draft).await?;
    Ok(HttpResponse::Created().json(experience))
}

/// Experience entries of one user.
#[utoipa::path(
    get,
    path = "/api/v1/experiences/user/{user_id}",
    params(("user_id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Experience entries", body = [ExperienceSchema]),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema)
    ),
    tags = ["experiences"],
    operation_id = "listUserExperiences"
)]
#[get("/experiences/user/{user_id}")]
pub async fn list_user_experiences(
    state: web::Data<HttpState>,
    _principal: Principal,
    path: web::Path<UserId>,
) -> ApiResult<web::Json<Vec<Experience>>> {
    Ok(web::Json(
        state.experiences.list_by_user(path.into_inner()).await?,
    ))
}

/// Update an experience entry; omitted fields keep their value.
#[utoipa::path(
    put,
    path = "/api/v1/experiences/{id}",
    params(("id" = i64, Path, description = "Experience identifier")),
    request_body = ExperienceUpdateRequest,
    responses(
        (status = 200, description = "Updated experience", body = ExperienceSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Not the owner", body = ErrorSchema),
        (status = 404, description = "Experience not found", body = ErrorSchema)
    ),
    tags = ["experiences"],
    operation_id = "updateExperience"
)]
#[put("/experiences/{id}")]
pub async fn update_experience(
    state: web::Data<HttpState>,
    principal: Principal,
    path: web::Path<ExperienceId>,
    payload: web::Json<ExperienceUpdateRequest>,
) -> ApiResult<web::Json<Experience>> {
    let patch = ExperiencePatch::from(payload.into_inner());
    Ok(web::Json(
        state
            .experiences
            .update(&principal, path.into_inner(), patch)
            .await?,
    ))
}

/// Delete an experience entry.
#[utoipa::path(
    delete,
    path = "/api/v1/experiences/{id}",
    params(("id" = i64, Path, description = "Experience identifier")),
    responses(
        (status = 200, description = "Deleted experience", body = ExperienceSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Not the owner", body = ErrorSchema),
        (status = 404, description = "Experience not found", body = ErrorSchema)
    ),
    tags = ["experiences"],
    operation_id = "deleteExperience"
)]
#[delete("/experiences/{id}")]
pub async fn delete_experience(
    state: web::Data<HttpState>,
    principal: Principal,
    path: web::Path<ExperienceId>,
) -> ApiResult<web::Json<Experience>> {
    Ok(web::Json(
        state
            .experiences
            .delete(&principal, path.into_inner())
            .await?,
    ))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use actix_web::http::StatusCode;
    use actix_web::http::header::AUTHORIZATION;
    use actix_web::test::TestRequest;
    use rstest::rstest;
    use serde_json::json;

    use crate::domain::{Experience, ExperienceDraft, User};
    use crate::inbound::http::test_utils::{
        TestContext, admin_principal, init_api, seed_admin, seed_user, send, user_principal,
    };

    async fn entry(context: &TestContext, user: &User) -> Experience {
        context
            .state()
            .experiences
            .create(ExperienceDraft {
                company_name: "Initech".into(),
                role: "Developer".into(),
                years: 2,
                user_id: user.id,
            })
            .await
            .expect("experience creates")
    }

    #[actix_web::test]
    async fn users_record_their_own_history() {
        let context = TestContext::new();
        let user = seed_user(&context, "ada@example.org", "pw").await;
        let app = init_api(&context).await;

        let request = TestRequest::post()
            .uri("/api/v1/experiences")
            .insert_header((AUTHORIZATION, context.bearer(&user_principal(&user)).await))
            .set_json(json!({
                "companyName": "Initech",
                "role": "Developer",
                "years": 2,
                "userId": user.id.get(),
            }))
            .to_request();
        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["companyName"], "Initech");
        assert_eq!(body["userId"], user.id.get());
    }

    #[actix_web::test]
    async fn users_cannot_record_history_for_others() {
        let context = TestContext::new();
        let ada = seed_user(&context, "ada@example.org", "pw").await;
        let bob = seed_user(&context, "bob@example.org", "pw").await;
        let app = init_api(&context).await;

        let request = TestRequest::post()
            .uri("/api/v1/experiences")
            .insert_header((AUTHORIZATION, context.bearer(&user_principal(&ada)).await))
            .set_json(json!({
                "companyName": "Initech",
                "role": "Developer",
                "years": 2,
                "userId": bob.id.get(),
            }))
            .to_request();
        assert_eq!(send(&app, request).await.0, StatusCode::FORBIDDEN);
    }

    #[rstest]
    #[case::owner(true, StatusCode::OK)]
    #[case::stranger(false, StatusCode::FORBIDDEN)]
    #[actix_web::test]
    async fn only_the_owner_or_an_admin_may_edit(#[case] owner: bool, #[case] expected: StatusCode) {
        let context = TestContext::new();
        let ada = seed_user(&context, "ada@example.org", "pw").await;
        let bob = seed_user(&context, "bob@example.org", "pw").await;
        let experience = entry(&context, &ada).await;
        let actor = if owner { &ada } else { &bob };
        let app = init_api(&context).await;

        let request = TestRequest::put()
            .uri(&format!("/api/v1/experiences/{}", experience.id))
            .insert_header((AUTHORIZATION, context.bearer(&user_principal(actor)).await))
            .set_json(json!({"years": 4}))
            .to_request();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, expected);
        if owner {
            assert_eq!(body["years"], 4);
            assert_eq!(body["role"], "Developer");
        }
    }

    #[actix_web::test]
    async fn admins_may_delete_any_entry() {
        let context = TestContext::new();
        let user = seed_user(&context, "ada@example.org", "pw").await;
        let admin = seed_admin(&context, "boss@example.org", "pw").await;
        let experience = entry(&context, &user).await;
        let app = init_api(&context).await;

        let request = TestRequest::delete()
            .uri(&format!("/api/v1/experiences/{}", experience.id))
            .insert_header((AUTHORIZATION, context.bearer(&admin_principal(&admin)).await))
            .to_request();
        assert_eq!(send(&app, request).await.0, StatusCode::OK);

        let list = TestRequest::get()
            .uri(&format!("/api/v1/experiences/user/{}", user.id))
            .insert_header((AUTHORIZATION, context.bearer(&user_principal(&user)).await))
            .to_request();
        assert_eq!(send(&app, list).await.1, json!([]));
    }

    #[actix_web::test]
    async fn listing_requires_authentication() {
        let context = TestContext::new();
        let user = seed_user(&context, "ada@example.org", "pw").await;
        entry(&context, &user).await;
        let app = init_api(&context).await;

        let request = TestRequest::get()
            .uri(&format!("/api/v1/experiences/user/{}", user.id))
            .to_request();
        assert_eq!(send(&app, request).await.0, StatusCode::UNAUTHORIZED);
    }
}
