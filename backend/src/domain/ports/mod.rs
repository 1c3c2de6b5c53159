//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (repositories, hashing, tokens) are implemented by outbound
//! adapters. Driving ports are implemented by the domain services and called
//! by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod access_tokens;
mod admin_accounts;
mod admin_repository;
mod association_manager;
mod association_repository;
mod company_directory;
mod company_repository;
mod experience_log;
mod experience_repository;
mod job_board;
mod job_posting_repository;
mod login_service;
mod password_hasher;
mod skill_catalogue;
mod skill_repository;
mod unique_key;
mod user_accounts;
mod user_repository;

#[cfg(test)]
pub use access_tokens::MockAccessTokens;
pub use access_tokens::{AccessTokenError, AccessTokens, IssuedToken};
#[cfg(test)]
pub use admin_accounts::MockAdminAccounts;
pub use admin_accounts::AdminAccounts;
#[cfg(test)]
pub use admin_repository::MockAdminRepository;
pub use admin_repository::{AdminRepository, AdminRepositoryError};
#[cfg(test)]
pub use association_manager::MockAssociationManager;
pub use association_manager::AssociationManager;
#[cfg(test)]
pub use association_repository::MockAssociationRepository;
pub use association_repository::{AssociationRepository, AssociationRepositoryError};
#[cfg(test)]
pub use company_directory::MockCompanyDirectory;
pub use company_directory::CompanyDirectory;
#[cfg(test)]
pub use company_repository::MockCompanyRepository;
pub use company_repository::{CompanyRepository, CompanyRepositoryError};
#[cfg(test)]
pub use experience_log::MockExperienceLog;
pub use experience_log::ExperienceLog;
#[cfg(test)]
pub use experience_repository::MockExperienceRepository;
pub use experience_repository::{ExperienceRepository, ExperienceRepositoryError};
#[cfg(test)]
pub use job_board::MockJobBoard;
pub use job_board::JobBoard;
#[cfg(test)]
pub use job_posting_repository::MockJobPostingRepository;
pub use job_posting_repository::{JobPostingRepository, JobPostingRepositoryError};
pub use login_service::LoginService;
#[cfg(test)]
pub use login_service::MockLoginService;
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{FixturePasswordHasher, PasswordHasher, PasswordHasherError};
#[cfg(test)]
pub use skill_catalogue::MockSkillCatalogue;
pub use skill_catalogue::SkillCatalogue;
#[cfg(test)]
pub use skill_repository::MockSkillRepository;
pub use skill_repository::{SkillRepository, SkillRepositoryError};
pub use unique_key::UniqueKey;
#[cfg(test)]
pub use user_accounts::MockUserAccounts;
pub use user_accounts::UserAccounts;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
