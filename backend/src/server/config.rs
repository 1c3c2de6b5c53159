//! Server settings loaded via OrthoConfig.
//!
//! Values come from `JOBSCOUT_*` environment variables, CLI flags or a
//! config file. The database URL falls back to the `POSTGRES_*`, `DB_HOST`
//! and `DB_PORT` variables used by the docker-compose deployment.

use std::net::SocketAddr;

use jobscout::outbound::security::DEFAULT_TOKEN_TTL_MINUTES;
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_BCRYPT_COST: u32 = bcrypt::DEFAULT_COST;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

const COMPOSE_VARIABLES: [(&str, &str); 5] = [
    ("POSTGRES_USER", "myuser"),
    ("POSTGRES_PASSWORD", "mypassword"),
    ("POSTGRES_DB", "mydb"),
    ("DB_HOST", "db"),
    ("DB_PORT", "5432"),
];

/// Configuration values for the HTTP server and its adapters.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "JOBSCOUT")]
pub struct AppSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL; without one the in-memory store is used.
    pub database_url: Option<String>,
    /// HS256 signing secret for access tokens.
    pub jwt_secret: Option<String>,
    /// Access token lifetime.
    pub token_ttl_minutes: Option<i64>,
    /// bcrypt work factor.
    pub bcrypt_cost: Option<u32>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Apply embedded migrations before serving.
    #[ortho_config(default = false)]
    pub run_migrations: bool,
    /// Allow any origin, method and header.
    #[ortho_config(default = false)]
    pub cors_permissive: bool,
}

/// Settings that cannot be turned into a running server.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address {value:?}: {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("token_ttl_minutes must be positive, got {0}")]
    TokenTtl(i64),
}

impl AppSettings {
    /// Parsed listen address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|source| SettingsError::BindAddr {
            value: value.to_owned(),
            source,
        })
    }

    /// Explicit URL, else one composed from the compose variables.
    pub fn database_url(&self) -> Option<String> {
        self.database_url
            .clone()
            .or_else(|| compose_database_url(|name| std::env::var(name).ok()))
    }

    pub fn token_ttl_minutes(&self) -> Result<i64, SettingsError> {
        match self.token_ttl_minutes.unwrap_or(DEFAULT_TOKEN_TTL_MINUTES) {
            minutes if minutes > 0 => Ok(minutes),
            other => Err(SettingsError::TokenTtl(other)),
        }
    }

    pub fn bcrypt_cost(&self) -> u32 {
        self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST)
    }

    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }
}

/// Build a PostgreSQL URL when at least one compose variable is set,
/// defaulting the rest.
fn compose_database_url(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    let values: Vec<(Option<String>, &str)> = COMPOSE_VARIABLES
        .iter()
        .map(|(name, default)| (lookup(name), *default))
        .collect();
    if values.iter().all(|(value, _)| value.is_none()) {
        return None;
    }
    let resolved: Vec<String> = values
        .into_iter()
        .map(|(value, default)| value.unwrap_or_else(|| default.to_owned()))
        .collect();
    let [user, password, database, host, port] = resolved.as_slice() else {
        return None;
    };
    Some(format!(
        "postgres://{user}:{password}@{host}:{port}/{database}"
    ))
}
