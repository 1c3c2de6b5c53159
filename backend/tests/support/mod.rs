//! Shared helpers for the Diesel integration suites.
//!
//! Each suite compiles as its own crate and pulls this module in with
//! `mod support;`, so not every helper is used by every suite.

#![allow(dead_code, reason = "each integration suite uses a subset of the helpers")]

pub mod embedded_postgres;

use jobscout::domain::ports::{
    AdminRepository, CompanyRepository, JobPostingRepository, SkillRepository, UserRepository,
};
use jobscout::domain::{
    Admin, AdminId, AdminProfile, Company, CompanyId, JobPosting, NewCompany, NewJobPosting,
    NewSkill, PasswordHash, Skill, User, UserProfile,
};
use jobscout::outbound::persistence::{
    DbPool, DieselAdminRepository, DieselAssociationRepository, DieselCompanyRepository,
    DieselExperienceRepository, DieselJobPostingRepository, DieselSkillRepository,
    DieselUserRepository, PoolConfig,
};
use pg_embedded_setup_unpriv::TemporaryDatabase;
use tokio::runtime::Runtime;

use embedded_postgres::{provision_database, shared_cluster};

/// Returns true when `SKIP_TEST_CLUSTER` is "1", "true" or "yes".
pub fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Skip when `SKIP_TEST_CLUSTER` is set, otherwise fail loudly.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}

/// Every Diesel repository over one freshly migrated database.
pub struct DieselStores {
    /// Runtime driving the async repositories from synchronous tests.
    pub runtime: Runtime,
    pub admins: DieselAdminRepository,
    pub users: DieselUserRepository,
    pub companies: DieselCompanyRepository,
    pub jobs: DieselJobPostingRepository,
    pub skills: DieselSkillRepository,
    pub experiences: DieselExperienceRepository,
    pub links: DieselAssociationRepository,
    _database: TemporaryDatabase,
}

fn setup_stores() -> Result<DieselStores, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = shared_cluster()?;
    let database = provision_database(cluster)?;
    let config = PoolConfig::new(database.url().to_string()).with_max_size(2);
    let pool = runtime
        .block_on(DbPool::new(config))
        .map_err(|err| err.to_string())?;

    Ok(DieselStores {
        runtime,
        admins: DieselAdminRepository::new(pool.clone()),
        users: DieselUserRepository::new(pool.clone()),
        companies: DieselCompanyRepository::new(pool.clone()),
        jobs: DieselJobPostingRepository::new(pool.clone()),
        skills: DieselSkillRepository::new(pool.clone()),
        experiences: DieselExperienceRepository::new(pool.clone()),
        links: DieselAssociationRepository::new(pool),
        _database: database,
    })
}

/// Stores for one test, or `None` when the cluster is unavailable and
/// skipping is allowed.
pub fn diesel_stores() -> Option<DieselStores> {
    match setup_stores() {
        Ok(stores) => Some(stores),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

pub fn hash() -> PasswordHash {
    PasswordHash::new("$2b$04$stored-hash")
}

pub fn admin_profile(email: &str, national_id: &str) -> AdminProfile {
    AdminProfile {
        name: "Grace Hopper".into(),
        national_id: national_id.into(),
        email: email.into(),
        phone: "555-0100".into(),
    }
}

pub fn user_profile(email: &str, national_id: &str) -> UserProfile {
    UserProfile {
        name: "Ada Lovelace".into(),
        national_id: national_id.into(),
        email: email.into(),
        phone: "555-0101".into(),
        work_area: "Engineering".into(),
        education_level: "University".into(),
    }
}

pub fn new_company(admin_id: AdminId) -> NewCompany {
    NewCompany {
        name: "Acme".into(),
        description: "Widgets".into(),
        city: "Recife".into(),
        postal_code: "50000-000".into(),
        employee_count: 12,
        years_active: 3,
        admin_id,
    }
}

pub fn new_posting(company_id: CompanyId) -> NewJobPosting {
    NewJobPosting {
        title: "Backend Engineer".into(),
        description: "Rust services".into(),
        work_mode: "remote".into(),
        salary: 9000.0,
        openings: 2,
        company_id,
    }
}

impl DieselStores {
    pub async fn seed_admin(&self, email: &str, national_id: &str) -> Admin {
        self.admins
            .insert(&admin_profile(email, national_id), &hash())
            .await
            .expect("admin inserts")
    }

    pub async fn seed_user(&self, email: &str, national_id: &str) -> User {
        self.users
            .insert(&user_profile(email, national_id), &hash())
            .await
            .expect("user inserts")
    }

    pub async fn seed_company(&self, admin_id: AdminId) -> Company {
        self.companies
            .insert(&new_company(admin_id))
            .await
            .expect("company inserts")
    }

    pub async fn seed_posting(&self, company_id: CompanyId) -> JobPosting {
        self.jobs
            .insert(&new_posting(company_id))
            .await
            .expect("posting inserts")
    }

    pub async fn seed_skill(&self, name: &str) -> Skill {
        self.skills
            .insert(&NewSkill::new(name).expect("valid skill name"))
            .await
            .expect("skill inserts")
    }
}
