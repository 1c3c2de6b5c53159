//! Company service implementing the [`CompanyDirectory`] driving port.
//!
//! Owner existence is checked before writes so a missing admin surfaces as
//! `not_found` rather than as a foreign-key failure from the store.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::ports::{
    AdminRepository, CompanyDirectory, CompanyRepository, CompanyRepositoryError,
};
use crate::domain::{AdminId, Company, CompanyDraft, CompanyId, CompanyPatch, Error, NewCompany};

use super::admin_service::{admin_not_found, map_admin_error};

/// Creates and maintains companies.
#[derive(Clone)]
pub struct CompanyService<C, A> {
    companies: Arc<C>,
    admins: Arc<A>,
}

impl<C, A> CompanyService<C, A> {
    /// Create a new service over the company and admin repositories.
    pub fn new(companies: Arc<C>, admins: Arc<A>) -> Self {
        Self { companies, admins }
    }
}

pub(crate) fn map_company_error(error: CompanyRepositoryError) -> Error {
    match error {
        CompanyRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("company repository unavailable: {message}"))
        }
        CompanyRepositoryError::Query { message } => {
            Error::internal(format!("company repository error: {message}"))
        }
        CompanyRepositoryError::MissingAdmin { .. } => admin_not_found(),
        CompanyRepositoryError::StillReferenced { message } => {
            Error::conflict("Company still has job postings").with_details(json!({
                "relation": message,
                "code": "still_referenced",
            }))
        }
    }
}

pub(crate) fn company_not_found() -> Error {
    Error::not_found("Company not found")
}

impl<C, A> CompanyService<C, A>
where
    C: CompanyRepository,
    A: AdminRepository,
{
    async fn ensure_admin(&self, admin_id: AdminId) -> Result<(), Error> {
        self.admins
            .find_by_id(admin_id)
            .await
            .map_err(map_admin_error)?
            .map(|_| ())
            .ok_or_else(admin_not_found)
    }
}

#[async_trait]
impl<C, A> CompanyDirectory for CompanyService<C, A>
where
    C: CompanyRepository,
    A: AdminRepository,
{
    async fn create(&self, draft: CompanyDraft) -> Result<Company, Error> {
        let company = NewCompany::new(draft)?;
        self.ensure_admin(company.admin_id).await?;
        let stored = self
            .companies
            .insert(&company)
            .await
            .map_err(map_company_error)?;
        tracing::info!(company_id = %stored.id, admin_id = %stored.admin_id, "company created");
        Ok(stored)
    }

    async fn get(&self, id: CompanyId) -> Result<Company, Error> {
        self.companies
            .find_by_id(id)
            .await
            .map_err(map_company_error)?
            .ok_or_else(company_not_found)
    }

    async fn list(&self) -> Result<Vec<Company>, Error> {
        self.companies.list().await.map_err(map_company_error)
    }

    async fn list_by_admin(&self, admin_id: AdminId) -> Result<Vec<Company>, Error> {
        self.ensure_admin(admin_id).await?;
        self.companies
            .list_by_admin(admin_id)
            .await
            .map_err(map_company_error)
    }

    async fn update(&self, id: CompanyId, patch: CompanyPatch) -> Result<Company, Error> {
        let changes = patch.validate()?;
        if changes.is_empty() {
            return self.get(id).await;
        }
        if let Some(admin_id) = changes.admin_id {
            self.ensure_admin(admin_id).await?;
        }
        self.companies
            .update(id, &changes)
            .await
            .map_err(map_company_error)?
            .ok_or_else(company_not_found)
    }

    async fn delete(&self, id: CompanyId) -> Result<Company, Error> {
        let company = self
            .companies
            .delete(id)
            .await
            .map_err(map_company_error)?
            .ok_or_else(company_not_found)?;
        tracing::info!(company_id = %company.id, "company deleted");
        Ok(company)
    }
}
