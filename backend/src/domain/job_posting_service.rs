//! Job posting service implementing the [`JobBoard`] driving port.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    AdminRepository, CompanyRepository, JobBoard, JobPostingRepository, JobPostingRepositoryError,
};
use crate::domain::{
    AdminId, CompanyId, Error, JobPosting, JobPostingDraft, JobPostingId, JobPostingPatch,
    NewJobPosting,
};

use super::admin_service::{admin_not_found, map_admin_error};
use super::company_service::{company_not_found, map_company_error};

/// Publishes and maintains job postings.
#[derive(Clone)]
pub struct JobPostingService<J, C, A> {
    jobs: Arc<J>,
    companies: Arc<C>,
    admins: Arc<A>,
}

impl<J, C, A> JobPostingService<J, C, A> {
    /// Create a new service over the posting, company, and admin repositories.
    pub fn new(jobs: Arc<J>, companies: Arc<C>, admins: Arc<A>) -> Self {
        Self {
            jobs,
            companies,
            admins,
        }
    }
}

pub(crate) fn map_job_error(error: JobPostingRepositoryError) -> Error {
    match error {
        JobPostingRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("job posting repository unavailable: {message}"))
        }
        JobPostingRepositoryError::Query { message } => {
            Error::internal(format!("job posting repository error: {message}"))
        }
        JobPostingRepositoryError::MissingCompany { .. } => company_not_found(),
    }
}

pub(crate) fn job_not_found() -> Error {
    Error::not_found("Job posting not found")
}

impl<J, C, A> JobPostingService<J, C, A>
where
    J: JobPostingRepository,
    C: CompanyRepository,
    A: AdminRepository,
{
    async fn ensure_company(&self, company_id: CompanyId) -> Result<(), Error> {
        self.companies
            .find_by_id(company_id)
            .await
            .map_err(map_company_error)?
            .map(|_| ())
            .ok_or_else(company_not_found)
    }
}

#[async_trait]
impl<J, C, A> JobBoard for JobPostingService<J, C, A>
where
    J: JobPostingRepository,
    C: CompanyRepository,
    A: AdminRepository,
{
    async fn create(&self, draft: JobPostingDraft) -> Result<JobPosting, Error> {
        let posting = NewJobPosting::new(draft)?;
        self.ensure_company(posting.company_id).await?;
        let stored = self.jobs.insert(&posting).await.map_err(map_job_error)?;
        tracing::info!(job_id = %stored.id, company_id = %stored.company_id, "job posting created");
        Ok(stored)
    }

    async fn get(&self, id: JobPostingId) -> Result<JobPosting, Error> {
        self.jobs
            .find_by_id(id)
            .await
            .map_err(map_job_error)?
            .ok_or_else(job_not_found)
    }

    async fn list(&self) -> Result<Vec<JobPosting>, Error> {
        self.jobs.list().await.map_err(map_job_error)
    }

    async fn list_by_company(&self, company_id: CompanyId) -> Result<Vec<JobPosting>, Error> {
        self.ensure_company(company_id).await?;
        self.jobs
            .list_by_company(company_id)
            .await
            .map_err(map_job_error)
    }

    async fn list_by_admin(&self, admin_id: AdminId) -> Result<Vec<JobPosting>, Error> {
        self.admins
            .find_by_id(admin_id)
            .await
            .map_err(map_admin_error)?
            .ok_or_else(admin_not_found)?;
        self.jobs.list_by_admin(admin_id).await.map_err(map_job_error)
    }

    async fn update(
        &self,
        id: JobPostingId,
        patch: JobPostingPatch,
    ) -> Result<JobPosting, Error> {
        let changes = patch.validate()?;
        if changes.is_empty() {
            return self.get(id).await;
        }
        if let Some(company_id) = changes.company_id {
            self.ensure_company(company_id).await?;
        }
        self.jobs
            .update(id, &changes)
            .await
            .map_err(map_job_error)?
            .ok_or_else(job_not_found)
    }

    async fn delete(&self, id: JobPostingId) -> Result<JobPosting, Error> {
        let posting = self
            .jobs
            .delete(id)
            .await
            .map_err(map_job_error)?
            .ok_or_else(job_not_found)?;
        tracing::info!(job_id = %posting.id, "job posting deleted");
        Ok(posting)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::{
        MockAdminRepository, MockCompanyRepository, MockJobPostingRepository,
    };
    use crate::domain::{Company, ErrorCode, NewCompany};
    use rstest::{fixture, rstest};

    type Service =
        JobPostingService<MockJobPostingRepository, MockCompanyRepository, MockAdminRepository>;

    fn company(id: CompanyId) -> Company {
        Company::from_new(
            id,
            NewCompany {
                name: "Acme".into(),
                description: "Anvils".into(),
                city: "Springfield".into(),
                postal_code: "12345".into(),
                employee_count: 3,
                years_active: 1,
                admin_id: AdminId::new(1),
            },
        )
    }

    fn companies_with(existing: Option<CompanyId>) -> MockCompanyRepository {
        let mut companies = MockCompanyRepository::new();
        companies.expect_find_by_id().returning(move |id| {
            Ok(existing.filter(|known| *known == id).map(company))
        });
        companies
    }

    fn make_service(jobs: MockJobPostingRepository, companies: MockCompanyRepository) -> Service {
        JobPostingService::new(
            Arc::new(jobs),
            Arc::new(companies),
            Arc::new(MockAdminRepository::new()),
        )
    }

    #[fixture]
    fn draft() -> JobPostingDraft {
        JobPostingDraft {
            title: "Backend engineer".into(),
            description: "Build services".into(),
            work_mode: "remote".into(),
            salary: 5200.5,
            openings: 2,
            company_id: CompanyId::new(3),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn create_publishes_posting_for_existing_company(draft: JobPostingDraft) {
        let mut jobs = MockJobPostingRepository::new();
        jobs.expect_insert()
            .times(1)
            .returning(|new| Ok(JobPosting::from_new(JobPostingId::new(11), new.clone())));

        let posting = make_service(jobs, companies_with(Some(CompanyId::new(3))))
            .create(draft)
            .await
            .expect("create");
        assert_eq!(posting.id, JobPostingId::new(11));
        assert!((posting.salary - 5200.5).abs() < f64::EPSILON);
    }

    #[rstest]
    #[tokio::test]
    async fn create_for_missing_company_is_not_found(draft: JobPostingDraft) {
        let mut jobs = MockJobPostingRepository::new();
        jobs.expect_insert().never();

        let error = make_service(jobs, companies_with(None))
            .create(draft)
            .await
            .expect_err("missing company");
        assert_eq!(error.code(), ErrorCode::NotFound);
        assert_eq!(error.message(), "Company not found");
    }

    #[rstest]
    #[case::negative_salary(|d: &mut JobPostingDraft| d.salary = -1.0, "salary")]
    #[case::non_finite_salary(|d: &mut JobPostingDraft| d.salary = f64::NAN, "salary")]
    #[case::negative_openings(|d: &mut JobPostingDraft| d.openings = -3, "openings")]
    #[case::blank_title(|d: &mut JobPostingDraft| d.title = " ".into(), "title")]
    #[tokio::test]
    async fn invalid_drafts_name_the_field(
        mut draft: JobPostingDraft,
        #[case] mutate: fn(&mut JobPostingDraft),
        #[case] field: &str,
    ) {
        mutate(&mut draft);
        let error = make_service(MockJobPostingRepository::new(), MockCompanyRepository::new())
            .create(draft)
            .await
            .expect_err("invalid");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(error.details().expect("details")["field"], field);
    }

    #[tokio::test]
    async fn listing_by_missing_admin_is_not_found() {
        let mut admins = MockAdminRepository::new();
        admins.expect_find_by_id().return_once(|_| Ok(None));
        let mut jobs = MockJobPostingRepository::new();
        jobs.expect_list_by_admin().never();

        let service = JobPostingService::new(
            Arc::new(jobs),
            Arc::new(MockCompanyRepository::new()),
            Arc::new(admins),
        );
        let error = service
            .list_by_admin(AdminId::new(8))
            .await
            .expect_err("missing admin");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn delete_of_missing_posting_is_not_found() {
        let mut jobs = MockJobPostingRepository::new();
        jobs.expect_delete().return_once(|_| Ok(None));

        let error = make_service(jobs, MockCompanyRepository::new())
            .delete(JobPostingId::new(1))
            .await
            .expect_err("missing");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }
}
