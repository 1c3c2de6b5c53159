//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AccessTokens, AdminAccounts, AdminRepository, AssociationManager, AssociationRepository,
    CompanyDirectory, CompanyRepository, ExperienceLog, ExperienceRepository, JobBoard,
    JobPostingRepository, LoginService, PasswordHasher, SkillCatalogue, SkillRepository,
    UserAccounts, UserRepository,
};
use crate::domain::{
    AdminAccountService, AssociationService, CompanyService, CredentialLoginService,
    ExperienceService, JobPostingService, SkillService, UserAccountService,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub admins: Arc<dyn AdminAccounts>,
    pub users: Arc<dyn UserAccounts>,
    pub companies: Arc<dyn CompanyDirectory>,
    pub jobs: Arc<dyn JobBoard>,
    pub skills: Arc<dyn SkillCatalogue>,
    pub experiences: Arc<dyn ExperienceLog>,
    pub associations: Arc<dyn AssociationManager>,
    pub login: Arc<dyn LoginService>,
    /// Verifies bearer tokens for the [`Principal`](crate::domain::Principal)
    /// extractor.
    pub tokens: Arc<dyn AccessTokens>,
}

/// Parameter object bundling the driven repository adapters.
///
/// A single store type may fill every slot; the in-memory adapter does.
pub struct Repositories<A, U, C, J, S, E, L> {
    pub admins: Arc<A>,
    pub users: Arc<U>,
    pub companies: Arc<C>,
    pub jobs: Arc<J>,
    pub skills: Arc<S>,
    pub experiences: Arc<E>,
    pub links: Arc<L>,
}

impl HttpState {
    /// Wire every domain service over the given adapters.
    pub fn from_repositories<A, U, C, J, S, E, L, H, T>(
        repos: Repositories<A, U, C, J, S, E, L>,
        hasher: Arc<H>,
        tokens: Arc<T>,
    ) -> Self
    where
        A: AdminRepository + 'static,
        U: UserRepository + 'static,
        C: CompanyRepository + 'static,
        J: JobPostingRepository + 'static,
        S: SkillRepository + 'static,
        E: ExperienceRepository + 'static,
        L: AssociationRepository + 'static,
        H: PasswordHasher + 'static,
        T: AccessTokens + 'static,
    {
        let Repositories {
            admins,
            users,
            companies,
            jobs,
            skills,
            experiences,
            links,
        } = repos;
        Self {
            admins: Arc::new(AdminAccountService::new(admins.clone(), hasher.clone())),
            users: Arc::new(UserAccountService::new(users.clone(), hasher.clone())),
            companies: Arc::new(CompanyService::new(companies.clone(), admins.clone())),
            jobs: Arc::new(JobPostingService::new(
                jobs.clone(),
                companies,
                admins.clone(),
            )),
            skills: Arc::new(SkillService::new(skills.clone())),
            experiences: Arc::new(ExperienceService::new(experiences, users.clone())),
            associations: Arc::new(AssociationService::new(
                links,
                users.clone(),
                jobs,
                skills,
                admins.clone(),
            )),
            login: Arc::new(CredentialLoginService::new(
                admins,
                users,
                hasher,
                tokens.clone(),
            )),
            tokens,
        }
    }
}
