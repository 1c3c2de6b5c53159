//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Every driven repository port has a Diesel implementation here, sharing one
//! `bb8` pool of `diesel-async` connections.
//!
//! - Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//!   private to this module.
//! - Referential rules live in the schema: user and posting deletes cascade
//!   to their links, while companies and postings restrict deleting their
//!   owner.
//! - Database failures are classified once in `diesel_helpers` and mapped to
//!   each port's error type.
//!
//! # Example
//!
//! ```ignore
//! use jobscout::outbound::persistence::{DbPool, DieselSkillRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/jobscout")).await?;
//! let skills = DieselSkillRepository::new(pool);
//! ```

mod diesel_admin_repository;
mod diesel_association_repository;
mod diesel_company_repository;
mod diesel_experience_repository;
pub(crate) mod diesel_helpers;
mod diesel_job_posting_repository;
mod diesel_skill_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_admin_repository::DieselAdminRepository;
pub use diesel_association_repository::DieselAssociationRepository;
pub use diesel_company_repository::DieselCompanyRepository;
pub use diesel_experience_repository::DieselExperienceRepository;
pub use diesel_job_posting_repository::DieselJobPostingRepository;
pub use diesel_skill_repository::DieselSkillRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
