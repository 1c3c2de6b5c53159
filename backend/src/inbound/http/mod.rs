//! HTTP inbound adapter exposing REST endpoints.
//!
//! Handlers deserialise requests, check the caller's [`Principal`] and
//! delegate to the driving ports held in [`state::HttpState`]. Every
//! resource lives under `/api/v1`; see [`api_scope`].
//!
//! [`Principal`]: crate::domain::Principal

pub mod admins;
pub mod auth;
pub mod companies;
pub mod error;
pub mod experiences;
pub mod health;
pub mod jobs;
pub mod schemas;
pub mod skills;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

use actix_web::web;
use serde::Serialize;

pub use error::ApiResult;

/// Acknowledgement body returned by association mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    /// Wrap `text` as a JSON `{"message": ...}` response.
    pub fn json(text: impl Into<String>) -> web::Json<Self> {
        web::Json(Self {
            message: text.into(),
        })
    }
}

/// Build the `/api/v1` scope with every resource handler registered.
///
/// Literal segments such as `/admins/me` are registered before the
/// `{id}` routes they would otherwise be captured by.
pub fn api_scope() -> actix_web::Scope {
    web::scope("/api/v1")
        .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .service(auth::issue_token)
        .service(admins::create_admin)
        .service(admins::list_admins)
        .service(admins::current_admin)
        .service(admins::update_admin)
        .service(admins::delete_admin)
        .service(users::create_user)
        .service(users::list_users)
        .service(users::current_user)
        .service(users::update_user)
        .service(users::delete_user)
        .service(users::add_user_skill)
        .service(users::remove_user_skill)
        .service(users::list_user_skills)
        .service(users::list_user_applications)
        .service(companies::create_company)
        .service(companies::list_companies)
        .service(companies::list_companies_by_admin)
        .service(companies::get_company)
        .service(companies::update_company)
        .service(companies::delete_company)
        .service(jobs::list_jobs_with_applicants)
        .service(jobs::create_job)
        .service(jobs::list_jobs)
        .service(jobs::list_jobs_by_company)
        .service(jobs::list_jobs_by_admin)
        .service(jobs::get_job)
        .service(jobs::update_job)
        .service(jobs::delete_job)
        .service(jobs::apply_to_job)
        .service(jobs::list_job_applicants)
        .service(jobs::add_job_skill)
        .service(jobs::remove_job_skill)
        .service(jobs::clear_job_skills)
        .service(jobs::list_job_skills)
        .service(skills::create_skill)
        .service(skills::list_skills)
        .service(skills::delete_skill)
        .service(experiences::create_experience)
        .service(experiences::list_user_experiences)
        .service(experiences::update_experience)
        .service(experiences::delete_experience)
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn message_serialises_as_object() {
        let body = Message::json("Skill added to user").into_inner();
        let value = serde_json::to_value(&body).expect("serialise");
        assert_eq!(value, serde_json::json!({"message": "Skill added to user"}));
    }
}
