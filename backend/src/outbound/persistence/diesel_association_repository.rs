//! PostgreSQL-backed `AssociationRepository` over the three join tables.
//!
//! Each join table has a composite primary key, so inserting an existing pair
//! fails with a unique violation instead of creating a second row.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AssociationRepository, AssociationRepositoryError};
use crate::domain::{JobPosting, JobPostingId, Skill, SkillId, User, UserId};

use super::diesel_helpers::{StoreFailure, classify_diesel_error, map_pool_error_message};
use super::models::{JobPostingRow, SkillRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{applications, job_posting_skills, job_postings, skills, user_skills, users};

/// Diesel-backed implementation of the `AssociationRepository` port.
#[derive(Clone)]
pub struct DieselAssociationRepository {
    pool: DbPool,
}

impl DieselAssociationRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> AssociationRepositoryError {
    AssociationRepositoryError::connection(map_pool_error_message(error))
}

fn map_diesel_error(error: diesel::result::Error) -> AssociationRepositoryError {
    match classify_diesel_error(error) {
        StoreFailure::Connection(message) => AssociationRepositoryError::connection(message),
        StoreFailure::UniqueViolation { .. } => AssociationRepositoryError::duplicate(),
        StoreFailure::ForeignKeyViolation { constraint } => {
            AssociationRepositoryError::missing_reference(
                constraint.unwrap_or_else(|| "unknown constraint".to_owned()),
            )
        }
        StoreFailure::Query(message) => AssociationRepositoryError::query(message),
    }
}

#[async_trait]
impl AssociationRepository for DieselAssociationRepository {
    async fn add_user_skill(
        &self,
        user_id: UserId,
        skill_id: SkillId,
    ) -> Result<(), AssociationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(user_skills::table)
            .values((
                user_skills::user_id.eq(user_id.get()),
                user_skills::skill_id.eq(skill_id.get()),
            ))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn remove_user_skill(
        &self,
        user_id: UserId,
        skill_id: SkillId,
    ) -> Result<bool, AssociationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(user_skills::table.find((user_id.get(), skill_id.get())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(removed > 0)
    }

    async fn list_user_skills(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Skill>, AssociationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<SkillRow> = user_skills::table
            .inner_join(skills::table)
            .filter(user_skills::user_id.eq(user_id.get()))
            .select(SkillRow::as_select())
            .order_by(skills::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Skill::from).collect())
    }

    async fn add_job_skill(
        &self,
        job_id: JobPostingId,
        skill_id: SkillId,
    ) -> Result<(), AssociationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(job_posting_skills::table)
            .values((
                job_posting_skills::job_posting_id.eq(job_id.get()),
                job_posting_skills::skill_id.eq(skill_id.get()),
            ))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn remove_job_skill(
        &self,
        job_id: JobPostingId,
        skill_id: SkillId,
    ) -> Result<bool, AssociationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed =
            diesel::delete(job_posting_skills::table.find((job_id.get(), skill_id.get())))
                .execute(&mut conn)
                .await
                .map_err(map_diesel_error)?;
        Ok(removed > 0)
    }

    async fn clear_job_skills(
        &self,
        job_id: JobPostingId,
    ) -> Result<usize, AssociationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(
            job_posting_skills::table.filter(job_posting_skills::job_posting_id.eq(job_id.get())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn list_job_skills(
        &self,
        job_id: JobPostingId,
    ) -> Result<Vec<Skill>, AssociationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<SkillRow> = job_posting_skills::table
            .inner_join(skills::table)
            .filter(job_posting_skills::job_posting_id.eq(job_id.get()))
            .select(SkillRow::as_select())
            .order_by(skills::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Skill::from).collect())
    }

    async fn add_application(
        &self,
        user_id: UserId,
        job_id: JobPostingId,
    ) -> Result<(), AssociationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(applications::table)
            .values((
                applications::user_id.eq(user_id.get()),
                applications::job_posting_id.eq(job_id.get()),
            ))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn list_user_applications(
        &self,
        user_id: UserId,
    ) -> Result<Vec<JobPosting>, AssociationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<JobPostingRow> = applications::table
            .inner_join(job_postings::table)
            .filter(applications::user_id.eq(user_id.get()))
            .select(JobPostingRow::as_select())
            .order_by(job_postings::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(JobPosting::from).collect())
    }

    async fn list_job_applicants(
        &self,
        job_id: JobPostingId,
    ) -> Result<Vec<User>, AssociationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<UserRow> = applications::table
            .inner_join(users::table)
            .filter(applications::job_posting_id.eq(job_id.get()))
            .select(UserRow::as_select())
            .order_by(users::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(User::from).collect())
    }
}
