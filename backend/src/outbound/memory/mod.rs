//! In-process store implementing every repository port.
//!
//! Used when no database is configured and by HTTP-level tests. It mirrors
//! the PostgreSQL schema rules: unique emails and national ids per account
//! collection, unique skill names, one row per association pair, cascading
//! deletes for users, postings, and skills, and restricted deletes for
//! admins and companies that still own rows.

mod accounts;
mod associations;
mod catalogue;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::{
    Admin, AdminId, Company, CompanyId, Experience, ExperienceId, JobPosting, JobPostingId, Skill,
    SkillId, User, UserId,
};

/// Next value of each table's identity column; ids start at 1.
#[derive(Debug, Default)]
struct Sequences {
    admins: i64,
    users: i64,
    companies: i64,
    job_postings: i64,
    skills: i64,
    experiences: i64,
}

fn next_id(counter: &mut i64) -> i64 {
    *counter += 1;
    *counter
}

#[derive(Debug, Default)]
struct Tables {
    sequences: Sequences,
    admins: BTreeMap<AdminId, Admin>,
    users: BTreeMap<UserId, User>,
    companies: BTreeMap<CompanyId, Company>,
    job_postings: BTreeMap<JobPostingId, JobPosting>,
    skills: BTreeMap<SkillId, Skill>,
    experiences: BTreeMap<ExperienceId, Experience>,
    user_skills: BTreeSet<(UserId, SkillId)>,
    job_posting_skills: BTreeSet<(JobPostingId, SkillId)>,
    applications: BTreeSet<(UserId, JobPostingId)>,
}

/// Thread-safe in-memory store.
///
/// Share one instance behind an `Arc` across every service so that
/// cross-entity rules see the same rows.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        // Every mutation completes before the guard drops, so a poisoned
        // lock still guards consistent tables.
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests;
