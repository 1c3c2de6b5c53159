//! PostgreSQL-backed `ExperienceRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ExperienceRepository, ExperienceRepositoryError};
use crate::domain::{Experience, ExperienceChanges, ExperienceId, NewExperience, UserId};

use super::diesel_helpers::{StoreFailure, classify_diesel_error, map_pool_error_message};
use super::models::{ExperienceRow, ExperienceUpdate, NewExperienceRow};
use super::pool::{DbPool, PoolError};
use super::schema::experiences;

/// Diesel-backed implementation of the `ExperienceRepository` port.
#[derive(Clone)]
pub struct DieselExperienceRepository {
    pool: DbPool,
}

impl DieselExperienceRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ExperienceRepositoryError {
    ExperienceRepositoryError::connection(map_pool_error_message(error))
}

fn map_diesel_error(error: diesel::result::Error) -> ExperienceRepositoryError {
    match classify_diesel_error(error) {
        StoreFailure::Connection(message) => ExperienceRepositoryError::connection(message),
        StoreFailure::UniqueViolation { .. } | StoreFailure::ForeignKeyViolation { .. } => {
            ExperienceRepositoryError::query("constraint violated")
        }
        StoreFailure::Query(message) => ExperienceRepositoryError::query(message),
    }
}

#[async_trait]
impl ExperienceRepository for DieselExperienceRepository {
    async fn insert(
        &self,
        experience: &NewExperience,
    ) -> Result<Experience, ExperienceRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: ExperienceRow = diesel::insert_into(experiences::table)
            .values(&NewExperienceRow::from(experience))
            .returning(ExperienceRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|error| match classify_diesel_error(error) {
                StoreFailure::ForeignKeyViolation { .. } => {
                    ExperienceRepositoryError::missing_user(experience.user_id)
                }
                StoreFailure::Connection(message) => {
                    ExperienceRepositoryError::connection(message)
                }
                StoreFailure::UniqueViolation { .. } => {
                    ExperienceRepositoryError::query("constraint violated")
                }
                StoreFailure::Query(message) => ExperienceRepositoryError::query(message),
            })?;
        Ok(row.into())
    }

    async fn find_by_id(
        &self,
        id: ExperienceId,
    ) -> Result<Option<Experience>, ExperienceRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<ExperienceRow> = experiences::table
            .find(id.get())
            .select(ExperienceRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Experience::from))
    }

    async fn list_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Experience>, ExperienceRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ExperienceRow> = experiences::table
            .filter(experiences::user_id.eq(user_id.get()))
            .select(ExperienceRow::as_select())
            .order_by(experiences::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Experience::from).collect())
    }

    async fn update(
        &self,
        id: ExperienceId,
        changes: &ExperienceChanges,
    ) -> Result<Option<Experience>, ExperienceRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<ExperienceRow> = diesel::update(experiences::table.find(id.get()))
            .set(&ExperienceUpdate::from(changes))
            .returning(ExperienceRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Experience::from))
    }

    async fn delete(
        &self,
        id: ExperienceId,
    ) -> Result<Option<Experience>, ExperienceRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<ExperienceRow> = diesel::delete(experiences::table.find(id.get()))
            .returning(ExperienceRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Experience::from))
    }
}
