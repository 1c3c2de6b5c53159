//! PostgreSQL-backed `SkillRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{SkillRepository, SkillRepositoryError, UniqueKey};
use crate::domain::{NewSkill, Skill, SkillId};

use super::diesel_helpers::{
    StoreFailure, classify_diesel_error, map_pool_error_message, unique_key_for,
};
use super::models::{NewSkillRow, SkillRow};
use super::pool::{DbPool, PoolError};
use super::schema::skills;

/// Diesel-backed implementation of the `SkillRepository` port.
#[derive(Clone)]
pub struct DieselSkillRepository {
    pool: DbPool,
}

impl DieselSkillRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> SkillRepositoryError {
    SkillRepositoryError::connection(map_pool_error_message(error))
}

fn map_diesel_error(error: diesel::result::Error) -> SkillRepositoryError {
    match classify_diesel_error(error) {
        StoreFailure::Connection(message) => SkillRepositoryError::connection(message),
        // The name constraint is the only unique key on the table.
        StoreFailure::UniqueViolation { constraint } => SkillRepositoryError::duplicate(
            unique_key_for(constraint.as_deref()).unwrap_or(UniqueKey::SkillName),
        ),
        StoreFailure::ForeignKeyViolation { .. } => {
            SkillRepositoryError::query("unexpected foreign key violation")
        }
        StoreFailure::Query(message) => SkillRepositoryError::query(message),
    }
}

#[async_trait]
impl SkillRepository for DieselSkillRepository {
    async fn insert(&self, skill: &NewSkill) -> Result<Skill, SkillRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: SkillRow = diesel::insert_into(skills::table)
            .values(&NewSkillRow { name: &skill.name })
            .returning(SkillRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(row.into())
    }

    async fn find_by_id(&self, id: SkillId) -> Result<Option<Skill>, SkillRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<SkillRow> = skills::table
            .find(id.get())
            .select(SkillRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Skill::from))
    }

    async fn list(&self) -> Result<Vec<Skill>, SkillRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<SkillRow> = skills::table
            .select(SkillRow::as_select())
            .order_by(skills::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Skill::from).collect())
    }

    async fn delete(&self, id: SkillId) -> Result<Option<Skill>, SkillRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<SkillRow> = diesel::delete(skills::table.find(id.get()))
            .returning(SkillRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Skill::from))
    }
}
