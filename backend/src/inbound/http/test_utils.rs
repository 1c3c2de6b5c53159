//! Test helpers for inbound HTTP components.
//!
//! Handlers run against the in-memory store with the reversible fixture
//! hasher and real HS256 tokens, so a test exercises the same services the
//! server wires.

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use chrono::TimeDelta;
use mockable::DefaultClock;
use serde_json::Value;

use crate::domain::ports::FixturePasswordHasher;
use crate::domain::{
    Admin, AdminDraft, AdminId, Company, CompanyDraft, JobPosting, JobPostingDraft, Principal,
    User, UserDraft,
};
use crate::inbound::http::api_scope;
use crate::inbound::http::state::{HttpState, Repositories};
use crate::outbound::memory::InMemoryStore;
use crate::outbound::security::JwtAccessTokens;

const TEST_SECRET: &[u8] = b"http-test-secret";

/// Application state over a fresh in-memory store.
pub struct TestContext {
    state: HttpState,
}

impl TestContext {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::new());
        let tokens = Arc::new(JwtAccessTokens::new(
            TEST_SECRET,
            TimeDelta::minutes(60),
            Arc::new(DefaultClock),
        ));
        let repos = Repositories {
            admins: store.clone(),
            users: store.clone(),
            companies: store.clone(),
            jobs: store.clone(),
            skills: store.clone(),
            experiences: store.clone(),
            links: store,
        };
        Self {
            state: HttpState::from_repositories(repos, Arc::new(FixturePasswordHasher), tokens),
        }
    }

    /// Shared state ready for `App::app_data`.
    pub fn data(&self) -> web::Data<HttpState> {
        web::Data::new(self.state.clone())
    }

    pub fn state(&self) -> &HttpState {
        &self.state
    }

    /// `Authorization` header value for `principal`.
    pub async fn bearer(&self, principal: &Principal) -> String {
        let issued = self
            .state
            .tokens
            .issue(principal)
            .await
            .expect("token issues");
        format!("Bearer {}", issued.access_token)
    }
}

/// Digits-only national id unique per email.
fn national_id_for(email: &str) -> String {
    email.bytes().map(|byte| byte.to_string()).collect()
}

/// Register an admin and return it.
pub async fn seed_admin(context: &TestContext, email: &str, password: &str) -> Admin {
    let national_id = national_id_for(email);
    context
        .state
        .admins
        .register(AdminDraft {
            name: "Grace Admin".into(),
            national_id,
            email: email.into(),
            phone: "+55 81 5555-0000".into(),
            password: password.into(),
        })
        .await
        .expect("admin registers")
}

/// Register a user and return it.
pub async fn seed_user(context: &TestContext, email: &str, password: &str) -> User {
    let national_id = national_id_for(email);
    context
        .state
        .users
        .register(UserDraft {
            name: "Ada Candidate".into(),
            national_id,
            email: email.into(),
            phone: "+55 81 5555-0001".into(),
            work_area: "Engineering".into(),
            education_level: "University".into(),
            password: password.into(),
        })
        .await
        .expect("user registers")
}

/// Create a company owned by `admin_id`.
pub async fn seed_company(context: &TestContext, admin_id: AdminId) -> Company {
    context
        .state
        .companies
        .create(CompanyDraft {
            name: "Acme".into(),
            description: "Widgets".into(),
            city: "Recife".into(),
            postal_code: "50000-000".into(),
            employee_count: 40,
            years_active: 7,
            admin_id,
        })
        .await
        .expect("company creates")
}

/// Create a job posting for `company`.
pub async fn seed_job(context: &TestContext, company: &Company) -> JobPosting {
    context
        .state
        .jobs
        .create(JobPostingDraft {
            title: "Backend Engineer".into(),
            description: "Own the API".into(),
            work_mode: "remote".into(),
            salary: 9000.0,
            openings: 2,
            company_id: company.id,
        })
        .await
        .expect("job creates")
}

/// Principal matching a seeded admin.
pub fn admin_principal(admin: &Admin) -> Principal {
    Principal::admin(admin.email.clone(), admin.id)
}

/// Principal matching a seeded user.
pub fn user_principal(user: &User) -> Principal {
    Principal::user(user.email.clone(), user.id)
}

/// Call `app` and decode the JSON body; an empty body decodes as `null`.
pub async fn send<S, B>(app: &S, request: Request) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let response = actix_test::call_service(app, request).await;
    let status = response.status();
    let bytes = actix_test::read_body(response).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };
    (status, body)
}

/// Initialise the full `/api/v1` scope over `context`.
pub async fn init_api(
    context: &TestContext,
) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
    actix_test::init_service(App::new().app_data(context.data()).service(api_scope())).await
}
