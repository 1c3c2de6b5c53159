//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use diesel::prelude::*;

use crate::domain::{
    Admin, AdminChanges, AdminId, AdminProfile, Company, CompanyChanges, CompanyId, Experience,
    ExperienceChanges, ExperienceId, JobPosting, JobPostingChanges, JobPostingId, NewCompany,
    NewExperience, NewJobPosting, PasswordHash, Skill, SkillId, User, UserChanges, UserId,
    UserProfile,
};

use super::schema::{admins, companies, experiences, job_postings, skills, users};

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = admins)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AdminRow {
    pub id: i64,
    pub name: String,
    pub national_id: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
}

impl From<AdminRow> for Admin {
    fn from(row: AdminRow) -> Self {
        Self {
            id: AdminId::new(row.id),
            name: row.name,
            national_id: row.national_id,
            email: row.email,
            phone: row.phone,
            password_hash: PasswordHash::new(row.password_hash),
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = admins)]
pub(crate) struct NewAdminRow<'a> {
    pub name: &'a str,
    pub national_id: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub password_hash: &'a str,
}

impl<'a> NewAdminRow<'a> {
    pub fn new(profile: &'a AdminProfile, hash: &'a PasswordHash) -> Self {
        Self {
            name: &profile.name,
            national_id: &profile.national_id,
            email: &profile.email,
            phone: &profile.phone,
            password_hash: hash.as_str(),
        }
    }
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = admins)]
pub(crate) struct AdminUpdate<'a> {
    pub name: Option<&'a str>,
    pub national_id: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub password_hash: Option<&'a str>,
}

impl<'a> From<&'a AdminChanges> for AdminUpdate<'a> {
    fn from(changes: &'a AdminChanges) -> Self {
        Self {
            name: changes.name.as_deref(),
            national_id: changes.national_id.as_deref(),
            email: changes.email.as_deref(),
            phone: changes.phone.as_deref(),
            password_hash: changes.password_hash.as_ref().map(PasswordHash::as_str),
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub name: String,
    pub national_id: String,
    pub email: String,
    pub phone: String,
    pub work_area: String,
    pub education_level: String,
    pub password_hash: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::new(row.id),
            name: row.name,
            national_id: row.national_id,
            email: row.email,
            phone: row.phone,
            work_area: row.work_area,
            education_level: row.education_level,
            password_hash: PasswordHash::new(row.password_hash),
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub national_id: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub work_area: &'a str,
    pub education_level: &'a str,
    pub password_hash: &'a str,
}

impl<'a> NewUserRow<'a> {
    pub fn new(profile: &'a UserProfile, hash: &'a PasswordHash) -> Self {
        Self {
            name: &profile.name,
            national_id: &profile.national_id,
            email: &profile.email,
            phone: &profile.phone,
            work_area: &profile.work_area,
            education_level: &profile.education_level,
            password_hash: hash.as_str(),
        }
    }
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserUpdate<'a> {
    pub name: Option<&'a str>,
    pub national_id: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub work_area: Option<&'a str>,
    pub education_level: Option<&'a str>,
    pub password_hash: Option<&'a str>,
}

impl<'a> From<&'a UserChanges> for UserUpdate<'a> {
    fn from(changes: &'a UserChanges) -> Self {
        Self {
            name: changes.name.as_deref(),
            national_id: changes.national_id.as_deref(),
            email: changes.email.as_deref(),
            phone: changes.phone.as_deref(),
            work_area: changes.work_area.as_deref(),
            education_level: changes.education_level.as_deref(),
            password_hash: changes.password_hash.as_ref().map(PasswordHash::as_str),
        }
    }
}

// ---------------------------------------------------------------------------
// Companies and postings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = companies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CompanyRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub city: String,
    pub postal_code: String,
    pub employee_count: i32,
    pub years_active: i32,
    pub admin_id: i64,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Self {
            id: CompanyId::new(row.id),
            name: row.name,
            description: row.description,
            city: row.city,
            postal_code: row.postal_code,
            employee_count: row.employee_count,
            years_active: row.years_active,
            admin_id: AdminId::new(row.admin_id),
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = companies)]
pub(crate) struct NewCompanyRow<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub city: &'a str,
    pub postal_code: &'a str,
    pub employee_count: i32,
    pub years_active: i32,
    pub admin_id: i64,
}

impl<'a> From<&'a NewCompany> for NewCompanyRow<'a> {
    fn from(company: &'a NewCompany) -> Self {
        Self {
            name: &company.name,
            description: &company.description,
            city: &company.city,
            postal_code: &company.postal_code,
            employee_count: company.employee_count,
            years_active: company.years_active,
            admin_id: company.admin_id.get(),
        }
    }
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = companies)]
pub(crate) struct CompanyUpdate<'a> {
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub city: Option<&'a str>,
    pub postal_code: Option<&'a str>,
    pub employee_count: Option<i32>,
    pub years_active: Option<i32>,
    pub admin_id: Option<i64>,
}

impl<'a> From<&'a CompanyChanges> for CompanyUpdate<'a> {
    fn from(changes: &'a CompanyChanges) -> Self {
        Self {
            name: changes.name.as_deref(),
            description: changes.description.as_deref(),
            city: changes.city.as_deref(),
            postal_code: changes.postal_code.as_deref(),
            employee_count: changes.employee_count,
            years_active: changes.years_active,
            admin_id: changes.admin_id.map(AdminId::get),
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = job_postings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct JobPostingRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub work_mode: String,
    pub salary: f64,
    pub openings: i32,
    pub company_id: i64,
}

impl From<JobPostingRow> for JobPosting {
    fn from(row: JobPostingRow) -> Self {
        Self {
            id: JobPostingId::new(row.id),
            title: row.title,
            description: row.description,
            work_mode: row.work_mode,
            salary: row.salary,
            openings: row.openings,
            company_id: CompanyId::new(row.company_id),
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = job_postings)]
pub(crate) struct NewJobPostingRow<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub work_mode: &'a str,
    pub salary: f64,
    pub openings: i32,
    pub company_id: i64,
}

impl<'a> From<&'a NewJobPosting> for NewJobPostingRow<'a> {
    fn from(posting: &'a NewJobPosting) -> Self {
        Self {
            title: &posting.title,
            description: &posting.description,
            work_mode: &posting.work_mode,
            salary: posting.salary,
            openings: posting.openings,
            company_id: posting.company_id.get(),
        }
    }
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = job_postings)]
pub(crate) struct JobPostingUpdate<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub work_mode: Option<&'a str>,
    pub salary: Option<f64>,
    pub openings: Option<i32>,
    pub company_id: Option<i64>,
}

impl<'a> From<&'a JobPostingChanges> for JobPostingUpdate<'a> {
    fn from(changes: &'a JobPostingChanges) -> Self {
        Self {
            title: changes.title.as_deref(),
            description: changes.description.as_deref(),
            work_mode: changes.work_mode.as_deref(),
            salary: changes.salary,
            openings: changes.openings,
            company_id: changes.company_id.map(CompanyId::get),
        }
    }
}

// ---------------------------------------------------------------------------
// Skills and experience
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = skills)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SkillRow {
    pub id: i64,
    pub name: String,
}

impl From<SkillRow> for Skill {
    fn from(row: SkillRow) -> Self {
        Self {
            id: SkillId::new(row.id),
            name: row.name,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = skills)]
pub(crate) struct NewSkillRow<'a> {
    pub name: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = experiences)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ExperienceRow {
    pub id: i64,
    pub company_name: String,
    pub role: String,
    pub years: i32,
    pub user_id: i64,
}

impl From<ExperienceRow> for Experience {
    fn from(row: ExperienceRow) -> Self {
        Self {
            id: ExperienceId::new(row.id),
            company_name: row.company_name,
            role: row.role,
            years: row.years,
            user_id: UserId::new(row.user_id),
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = experiences)]
pub(crate) struct NewExperienceRow<'a> {
    pub company_name: &'a str,
    pub role: &'a str,
    pub years: i32,
    pub user_id: i64,
}

impl<'a> From<&'a NewExperience> for NewExperienceRow<'a> {
    fn from(experience: &'a NewExperience) -> Self {
        Self {
            company_name: &experience.company_name,
            role: &experience.role,
            years: experience.years,
            user_id: experience.user_id.get(),
        }
    }
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = experiences)]
pub(crate) struct ExperienceUpdate<'a> {
    pub company_name: Option<&'a str>,
    pub role: Option<&'a str>,
    pub years: Option<i32>,
}

impl<'a> From<&'a ExperienceChanges> for ExperienceUpdate<'a> {
    fn from(changes: &'a ExperienceChanges) -> Self {
        Self {
            company_name: changes.company_name.as_deref(),
            role: changes.role.as_deref(),
            years: changes.years,
        }
    }
}
