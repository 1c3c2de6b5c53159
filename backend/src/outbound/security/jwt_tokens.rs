//! HS256 JSON Web Tokens implementing the [`AccessTokens`] port.
//!
//! Tokens carry `sub` (email), `role`, `id`, `iat`, and `exp`. Expiry is
//! checked against the injected clock rather than the system time so tests
//! can move time.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::TimeDelta;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::domain::ports::{AccessTokenError, AccessTokens, IssuedToken};
use crate::domain::{Principal, Role};

/// Default token lifetime in minutes.
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 60;

#[derive(Debug, Serialize)]
struct Claims<'a> {
    sub: &'a str,
    role: Role,
    id: i64,
    iat: i64,
    exp: i64,
}

/// Claims as received; every field is checked by hand.
#[derive(Debug, Deserialize)]
struct ReceivedClaims {
    sub: Option<Value>,
    role: Option<Value>,
    id: Option<Value>,
    exp: Option<Value>,
}

impl ReceivedClaims {
    fn principal(&self) -> Option<Principal> {
        let email = self.sub.as_ref()?.as_str().filter(|sub| !sub.is_empty())?;
        let role = self.role.as_ref()?.as_str()?.parse::<Role>().ok()?;
        let id = self.id.as_ref()?.as_i64().filter(|id| *id > 0)?;
        Some(Principal::new(email, role, id))
    }
}

/// Signs and verifies bearer tokens with a shared secret.
#[derive(Clone)]
pub struct JwtAccessTokens {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: TimeDelta,
    clock: Arc<dyn Clock>,
}

impl JwtAccessTokens {
    /// Create a token service signing with `secret`.
    pub fn new(secret: &[u8], ttl: TimeDelta, clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is compared against `clock` in `verify`.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl,
            clock,
        }
    }

    fn reject(reason: &str) -> AccessTokenError {
        warn!(reason, "bearer token rejected");
        AccessTokenError::rejected(reason)
    }
}

#[async_trait]
impl AccessTokens for JwtAccessTokens {
    async fn issue(&self, principal: &Principal) -> Result<IssuedToken, AccessTokenError> {
        let issued_at = self.clock.utc().timestamp();
        let claims = Claims {
            sub: principal.email(),
            role: principal.role(),
            id: principal.id(),
            iat: issued_at,
            exp: issued_at + self.ttl.num_seconds(),
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|err| AccessTokenError::signing(err.to_string()))?;
        Ok(IssuedToken::bearer(token, self.ttl.num_seconds()))
    }

    async fn verify(&self, token: &str) -> Result<Principal, AccessTokenError> {
        let claims = decode::<ReceivedClaims>(token, &self.decoding, &self.validation)
            .map_err(|err| Self::reject(&err.to_string()))?
            .claims;
        let Some(expires_at) = claims.exp.as_ref().and_then(Value::as_i64) else {
            return Err(Self::reject("missing expiry"));
        };
        if expires_at <= self.clock.utc().timestamp() {
            return Err(Self::reject("expired"));
        }
        claims.principal().ok_or_else(|| {
            warn!("bearer token lacks required claims");
            AccessTokenError::missing_claims()
        })
    }
}
