//! Backend entry-point: loads settings, prepares the store and serves the API.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use rand::RngCore;
use rand::rngs::OsRng;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
use zeroize::Zeroizing;

use jobscout::inbound::http::health::HealthState;
use jobscout::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use server::{AppSettings, ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        AppSettings::load_from_iter(std::env::args_os()).wrap_err("failed to load settings")?;
    let bind_addr = settings.bind_addr()?;
    let jwt_secret = resolve_jwt_secret(&settings)?;

    let mut config = ServerConfig::new(bind_addr, jwt_secret)
        .with_token_ttl_minutes(settings.token_ttl_minutes()?)
        .with_bcrypt_cost(settings.bcrypt_cost())
        .with_cors_permissive(settings.cors_permissive);

    if let Some(database_url) = settings.database_url() {
        if settings.run_migrations {
            info!("applying database migrations");
            run_migrations(&database_url)
                .await
                .wrap_err("failed to apply migrations")?;
        }
        let pool_config = PoolConfig::new(database_url).with_max_size(settings.pool_max_size());
        info!(url = %pool_config.redacted_url(), "connecting to PostgreSQL");
        let pool = DbPool::new(pool_config)
            .await
            .wrap_err("failed to build database pool")?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    info!(%bind_addr, "starting server");
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result.wrap_err("server terminated with an error")
}

/// Configured secret, or an ephemeral one in debug builds.
fn resolve_jwt_secret(settings: &AppSettings) -> Result<Zeroizing<String>> {
    if let Some(secret) = settings.jwt_secret.as_deref().filter(|s| !s.is_empty()) {
        return Ok(Zeroizing::new(secret.to_owned()));
    }
    if cfg!(debug_assertions) {
        warn!("JOBSCOUT_JWT_SECRET unset; using an ephemeral secret (dev only)");
        let mut bytes = Zeroizing::new([0_u8; 32]);
        OsRng.fill_bytes(bytes.as_mut());
        let secret: String = bytes.iter().map(|byte| format!("{byte:02x}")).collect();
        return Ok(Zeroizing::new(secret));
    }
    Err(eyre!("JOBSCOUT_JWT_SECRET must be set in release builds"))
}
