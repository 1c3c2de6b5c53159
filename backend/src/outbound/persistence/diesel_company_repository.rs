//! PostgreSQL-backed `CompanyRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CompanyRepository, CompanyRepositoryError};
use crate::domain::{AdminId, Company, CompanyChanges, CompanyId, NewCompany};

use super::diesel_helpers::{StoreFailure, classify_diesel_error, map_pool_error_message};
use super::models::{CompanyRow, CompanyUpdate, NewCompanyRow};
use super::pool::{DbPool, PoolError};
use super::schema::companies;

/// Diesel-backed implementation of the `CompanyRepository` port.
#[derive(Clone)]
pub struct DieselCompanyRepository {
    pool: DbPool,
}

impl DieselCompanyRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CompanyRepositoryError {
    CompanyRepositoryError::connection(map_pool_error_message(error))
}

/// Map a failed write.
///
/// `admin_id` is the owner the statement referenced; a foreign key failure on
/// insert or update means that admin is gone.
fn map_write_error(
    admin_id: Option<AdminId>,
) -> impl Fn(diesel::result::Error) -> CompanyRepositoryError {
    move |error| match classify_diesel_error(error) {
        StoreFailure::Connection(message) => CompanyRepositoryError::connection(message),
        StoreFailure::ForeignKeyViolation { constraint } => match admin_id {
            Some(admin_id) => CompanyRepositoryError::missing_admin(admin_id),
            None => CompanyRepositoryError::query(format!(
                "unexpected foreign key violation: {}",
                constraint.as_deref().unwrap_or("unknown")
            )),
        },
        StoreFailure::UniqueViolation { .. } => {
            CompanyRepositoryError::query("unique constraint violated")
        }
        StoreFailure::Query(message) => CompanyRepositoryError::query(message),
    }
}

fn map_diesel_error(error: diesel::result::Error) -> CompanyRepositoryError {
    map_write_error(None)(error)
}

fn map_delete_error(error: diesel::result::Error) -> CompanyRepositoryError {
    match classify_diesel_error(error) {
        StoreFailure::ForeignKeyViolation { .. } => {
            CompanyRepositoryError::still_referenced("job_postings")
        }
        StoreFailure::Connection(message) => CompanyRepositoryError::connection(message),
        StoreFailure::UniqueViolation { .. } => {
            CompanyRepositoryError::query("unique constraint violated")
        }
        StoreFailure::Query(message) => CompanyRepositoryError::query(message),
    }
}

#[async_trait]
impl CompanyRepository for DieselCompanyRepository {
    async fn insert(&self, company: &NewCompany) -> Result<Company, CompanyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: CompanyRow = diesel::insert_into(companies::table)
            .values(&NewCompanyRow::from(company))
            .returning(CompanyRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_write_error(Some(company.admin_id)))?;
        Ok(row.into())
    }

    async fn find_by_id(&self, id: CompanyId) -> Result<Option<Company>, CompanyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<CompanyRow> = companies::table
            .find(id.get())
            .select(CompanyRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Company::from))
    }

    async fn list(&self) -> Result<Vec<Company>, CompanyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<CompanyRow> = companies::table
            .select(CompanyRow::as_select())
            .order_by(companies::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Company::from).collect())
    }

    async fn list_by_admin(
        &self,
        admin_id: AdminId,
    ) -> Result<Vec<Company>, CompanyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<CompanyRow> = companies::table
            .filter(companies::admin_id.eq(admin_id.get()))
            .select(CompanyRow::as_select())
            .order_by(companies::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Company::from).collect())
    }

    async fn update(
        &self,
        id: CompanyId,
        changes: &CompanyChanges,
    ) -> Result<Option<Company>, CompanyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<CompanyRow> = diesel::update(companies::table.find(id.get()))
            .set(&CompanyUpdate::from(changes))
            .returning(CompanyRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_write_error(changes.admin_id))?;
        Ok(row.map(Company::from))
    }

    async fn delete(&self, id: CompanyId) -> Result<Option<Company>, CompanyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<CompanyRow> = diesel::delete(companies::table.find(id.get()))
            .returning(CompanyRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_delete_error)?;
        Ok(row.map(Company::from))
    }
}
