//! Builders wiring adapters into the HTTP state.

use std::sync::Arc;

use chrono::TimeDelta;
use mockable::DefaultClock;
use tracing::info;

use jobscout::inbound::http::state::{HttpState, Repositories};
use jobscout::outbound::memory::InMemoryStore;
use jobscout::outbound::persistence::{
    DbPool, DieselAdminRepository, DieselAssociationRepository, DieselCompanyRepository,
    DieselExperienceRepository, DieselJobPostingRepository, DieselSkillRepository,
    DieselUserRepository,
};
use jobscout::outbound::security::{BcryptPasswordHasher, JwtAccessTokens};

use super::ServerConfig;

/// Build the HTTP state over PostgreSQL when a pool is configured, otherwise
/// over a fresh in-memory store.
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    let hasher = Arc::new(BcryptPasswordHasher::new(config.bcrypt_cost));
    let tokens = Arc::new(JwtAccessTokens::new(
        config.jwt_secret.as_bytes(),
        TimeDelta::minutes(config.token_ttl_minutes),
        Arc::new(DefaultClock),
    ));

    match &config.db_pool {
        Some(pool) => {
            info!("serving from PostgreSQL");
            HttpState::from_repositories(diesel_repositories(pool), hasher, tokens)
        }
        None => {
            info!("no database configured; serving from the in-memory store");
            let store = Arc::new(InMemoryStore::new());
            let repositories = Repositories {
                admins: store.clone(),
                users: store.clone(),
                companies: store.clone(),
                jobs: store.clone(),
                skills: store.clone(),
                experiences: store.clone(),
                links: store,
            };
            HttpState::from_repositories(repositories, hasher, tokens)
        }
    }
}

fn diesel_repositories(
    pool: &DbPool,
) -> Repositories<
    DieselAdminRepository,
    DieselUserRepository,
    DieselCompanyRepository,
    DieselJobPostingRepository,
    DieselSkillRepository,
    DieselExperienceRepository,
    DieselAssociationRepository,
> {
    Repositories {
        admins: Arc::new(DieselAdminRepository::new(pool.clone())),
        users: Arc::new(DieselUserRepository::new(pool.clone())),
        companies: Arc::new(DieselCompanyRepository::new(pool.clone())),
        jobs: Arc::new(DieselJobPostingRepository::new(pool.clone())),
        skills: Arc::new(DieselSkillRepository::new(pool.clone())),
        experiences: Arc::new(DieselExperienceRepository::new(pool.clone())),
        links: Arc::new(DieselAssociationRepository::new(pool.clone())),
    }
}
