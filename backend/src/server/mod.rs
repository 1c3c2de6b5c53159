//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::AppSettings;

use actix_cors::Cors;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::Condition;
use actix_web::{App, HttpServer, web};
use std::net::SocketAddr;
use zeroize::Zeroizing;

use jobscout::Trace;
#[cfg(debug_assertions)]
use jobscout::doc::ApiDoc;
use jobscout::inbound::http::api_scope;
use jobscout::inbound::http::health::{HealthState, live, ready};
use jobscout::inbound::http::state::HttpState;
use jobscout::outbound::persistence::DbPool;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use state_builders::build_http_state;

/// Resolved runtime configuration for [`create_server`].
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) jwt_secret: Zeroizing<String>,
    pub(crate) token_ttl_minutes: i64,
    pub(crate) bcrypt_cost: u32,
    pub(crate) cors_permissive: bool,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, jwt_secret: Zeroizing<String>) -> Self {
        Self {
            bind_addr,
            jwt_secret,
            token_ttl_minutes: jobscout::outbound::security::DEFAULT_TOKEN_TTL_MINUTES,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            cors_permissive: false,
            db_pool: None,
        }
    }

    #[must_use]
    pub fn with_token_ttl_minutes(mut self, minutes: i64) -> Self {
        self.token_ttl_minutes = minutes;
        self
    }

    #[must_use]
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    #[must_use]
    pub fn with_cors_permissive(mut self, permissive: bool) -> Self {
        self.cors_permissive = permissive;
        self
    }

    /// Attach a database pool; without one the in-memory store is used.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    cors_permissive: bool,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Condition::new(cors_permissive, Cors::permissive()))
        .wrap(Trace)
        .service(api_scope())
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config));
    let server_health_state = health_state.clone();
    let ServerConfig {
        bind_addr,
        cors_permissive,
        ..
    } = config;

    let server = HttpServer::new(move || {
        build_app(
            server_health_state.clone(),
            http_state.clone(),
            cors_permissive,
        )
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
