//! PostgreSQL-backed `AdminRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AdminRepository, AdminRepositoryError};
use crate::domain::{Admin, AdminChanges, AdminId, AdminProfile, PasswordHash};

use super::diesel_helpers::{
    StoreFailure, classify_diesel_error, map_pool_error_message, unique_key_for,
};
use super::models::{AdminRow, AdminUpdate, NewAdminRow};
use super::pool::{DbPool, PoolError};
use super::schema::admins;

/// Diesel-backed implementation of the `AdminRepository` port.
#[derive(Clone)]
pub struct DieselAdminRepository {
    pool: DbPool,
}

impl DieselAdminRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> AdminRepositoryError {
    AdminRepositoryError::connection(map_pool_error_message(error))
}

fn map_diesel_error(error: diesel::result::Error) -> AdminRepositoryError {
    match classify_diesel_error(error) {
        StoreFailure::Connection(message) => AdminRepositoryError::connection(message),
        StoreFailure::UniqueViolation { constraint } => unique_key_for(constraint.as_deref())
            .map_or_else(
                || AdminRepositoryError::query("unique constraint violated"),
                AdminRepositoryError::duplicate,
            ),
        StoreFailure::ForeignKeyViolation { .. } => {
            AdminRepositoryError::still_referenced("companies")
        }
        StoreFailure::Query(message) => AdminRepositoryError::query(message),
    }
}

#[async_trait]
impl AdminRepository for DieselAdminRepository {
    async fn insert(
        &self,
        profile: &AdminProfile,
        password_hash: &PasswordHash,
    ) -> Result<Admin, AdminRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: AdminRow = diesel::insert_into(admins::table)
            .values(&NewAdminRow::new(profile, password_hash))
            .returning(AdminRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(row.into())
    }

    async fn find_by_id(&self, id: AdminId) -> Result<Option<Admin>, AdminRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<AdminRow> = admins::table
            .find(id.get())
            .select(AdminRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Admin::from))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, AdminRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<AdminRow> = admins::table
            .filter(admins::email.eq(email))
            .select(AdminRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Admin::from))
    }

    async fn list(&self) -> Result<Vec<Admin>, AdminRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<AdminRow> = admins::table
            .select(AdminRow::as_select())
            .order_by(admins::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Admin::from).collect())
    }

    async fn update(
        &self,
        id: AdminId,
        changes: &AdminChanges,
    ) -> Result<Option<Admin>, AdminRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<AdminRow> = diesel::update(admins::table.find(id.get()))
            .set(&AdminUpdate::from(changes))
            .returning(AdminRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Admin::from))
    }

    async fn delete(&self, id: AdminId) -> Result<Option<Admin>, AdminRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<AdminRow> = diesel::delete(admins::table.find(id.get()))
            .returning(AdminRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Admin::from))
    }
}
