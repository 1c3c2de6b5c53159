//! PostgreSQL-backed `JobPostingRepository` implementation using Diesel ORM.
//!
//! Skill links and applications of a posting go with it through
//! `ON DELETE CASCADE`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{JobPostingRepository, JobPostingRepositoryError};
use crate::domain::{
    AdminId, CompanyId, JobPosting, JobPostingChanges, JobPostingId, NewJobPosting,
};

use super::diesel_helpers::{StoreFailure, classify_diesel_error, map_pool_error_message};
use super::models::{JobPostingRow, JobPostingUpdate, NewJobPostingRow};
use super::pool::{DbPool, PoolError};
use super::schema::{companies, job_postings};

/// Diesel-backed implementation of the `JobPostingRepository` port.
#[derive(Clone)]
pub struct DieselJobPostingRepository {
    pool: DbPool,
}

impl DieselJobPostingRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> JobPostingRepositoryError {
    JobPostingRepositoryError::connection(map_pool_error_message(error))
}

fn map_write_error(
    company_id: Option<CompanyId>,
) -> impl Fn(diesel::result::Error) -> JobPostingRepositoryError {
    move |error| match (classify_diesel_error(error), company_id) {
        (StoreFailure::Connection(message), _) => JobPostingRepositoryError::connection(message),
        (StoreFailure::ForeignKeyViolation { .. }, Some(company_id)) => {
            JobPostingRepositoryError::missing_company(company_id)
        }
        (StoreFailure::ForeignKeyViolation { constraint }, None) => {
            JobPostingRepositoryError::query(format!(
                "unexpected foreign key violation: {}",
                constraint.as_deref().unwrap_or("unknown")
            ))
        }
        (StoreFailure::UniqueViolation { .. }, _) => {
            JobPostingRepositoryError::query("unique constraint violated")
        }
        (StoreFailure::Query(message), _) => JobPostingRepositoryError::query(message),
    }
}

fn map_diesel_error(error: diesel::result::Error) -> JobPostingRepositoryError {
    map_write_error(None)(error)
}

#[async_trait]
impl JobPostingRepository for DieselJobPostingRepository {
    async fn insert(
        &self,
        posting: &NewJobPosting,
    ) -> Result<JobPosting, JobPostingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: JobPostingRow = diesel::insert_into(job_postings::table)
            .values(&NewJobPostingRow::from(posting))
            .returning(JobPostingRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_write_error(Some(posting.company_id)))?;
        Ok(row.into())
    }

    async fn find_by_id(
        &self,
        id: JobPostingId,
    ) -> Result<Option<JobPosting>, JobPostingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<JobPostingRow> = job_postings::table
            .find(id.get())
            .select(JobPostingRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(JobPosting::from))
    }

    async fn list(&self) -> Result<Vec<JobPosting>, JobPostingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<JobPostingRow> = job_postings::table
            .select(JobPostingRow::as_select())
            .order_by(job_postings::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(JobPosting::from).collect())
    }

    async fn list_by_company(
        &self,
        company_id: CompanyId,
    ) -> Result<Vec<JobPosting>, JobPostingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<JobPostingRow> = job_postings::table
            .filter(job_postings::company_id.eq(company_id.get()))
            .select(JobPostingRow::as_select())
            .order_by(job_postings::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(JobPosting::from).collect())
    }

    async fn list_by_admin(
        &self,
        admin_id: AdminId,
    ) -> Result<Vec<JobPosting>, JobPostingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<JobPostingRow> = job_postings::table
            .inner_join(companies::table)
            .filter(companies::admin_id.eq(admin_id.get()))
            .select(JobPostingRow::as_select())
            .order_by(job_postings::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(JobPosting::from).collect())
    }

    async fn update(
        &self,
        id: JobPostingId,
        changes: &JobPostingChanges,
    ) -> Result<Option<JobPosting>, JobPostingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<JobPostingRow> = diesel::update(job_postings::table.find(id.get()))
            .set(&JobPostingUpdate::from(changes))
            .returning(JobPostingRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_write_error(changes.company_id))?;
        Ok(row.map(JobPosting::from))
    }

    async fn delete(
        &self,
        id: JobPostingId,
    ) -> Result<Option<JobPosting>, JobPostingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<JobPostingRow> = diesel::delete(job_postings::table.find(id.get()))
            .returning(JobPostingRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(JobPosting::from))
    }
}
