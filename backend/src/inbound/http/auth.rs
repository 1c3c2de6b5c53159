//! Bearer authentication for HTTP handlers.
//!
//! ```text
//! POST /api/v1/auth/token {"email":"a@x.com","password":"secret"}
//! Authorization: Bearer <accessToken>
//! ```
//!
//! Handlers that take a [`Principal`] argument require a valid token; role
//! and ownership checks happen in the handler body so a wrong role yields
//! `403` rather than `401`.

use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest, dev::Payload, post, web};
use futures_util::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{AccessTokenError, IssuedToken};
use crate::domain::{Error, LoginCredentials, Principal};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, IssuedTokenSchema};
use crate::inbound::http::state::HttpState;

const BEARER_SCHEME: &str = "bearer";

/// Login request body for `POST /api/v1/auth/token`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    #[schema(example = "ada@example.org")]
    pub email: String,
    pub password: String,
}

fn bearer_token(req: &HttpRequest) -> Result<String, Error> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| Error::unauthorized("Not authenticated"))?
        .to_str()
        .map_err(|_| Error::unauthorized("Invalid authorization header"))?;
    match value.split_once(' ') {
        Some((scheme, token))
            if scheme.eq_ignore_ascii_case(BEARER_SCHEME) && !token.trim().is_empty() =>
        {
            Ok(token.trim().to_owned())
        }
        _ => Err(Error::unauthorized("Not authenticated")),
    }
}

fn map_token_error(error: AccessTokenError) -> Error {
    match error {
        AccessTokenError::Rejected { .. } => Error::unauthorized("Invalid or expired token"),
        AccessTokenError::MissingClaims => Error::unauthorized("Invalid token"),
        AccessTokenError::Signing { message } => {
            Error::internal(format!("token verification failed: {message}"))
        }
    }
}

impl FromRequest for Principal {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let tokens = req
            .app_data::<web::Data<HttpState>>()
            .map(|state| state.tokens.clone());
        let token = bearer_token(req);
        Box::pin(async move {
            let tokens = tokens.ok_or_else(|| Error::internal("HTTP state is not configured"))?;
            let principal = tokens.verify(&token?).await.map_err(map_token_error)?;
            Ok::<_, actix_web::Error>(principal)
        })
    }
}

/// Exchange email and password for a bearer token.
#[utoipa::path(
    post,
    path = "/api/v1/auth/token",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Token issued", body = IssuedTokenSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Invalid credentials", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "issueToken",
    security([])
)]
#[post("/auth/token")]
pub async fn issue_token(
    state: web::Data<HttpState>,
    payload: web::Json<TokenRequest>,
) -> ApiResult<web::Json<IssuedToken>> {
    let TokenRequest { email, password } = payload.into_inner();
    let credentials = LoginCredentials::try_from_parts(&email, &password)?;
    let token = state.login.login(&credentials).await?;
    Ok(web::Json(token))
}
