//! Tests for the association service.

use super::*;
use crate::domain::ports::{
    MockAdminRepository, MockAssociationRepository, MockJobPostingRepository,
    MockSkillRepository, MockUserRepository,
};
use crate::domain::{
    Admin, AdminProfile, CompanyId, ErrorCode, PasswordHash, UserProfile,
};
use rstest::{fixture, rstest};

type Service = AssociationService<
    MockAssociationRepository,
    MockUserRepository,
    MockJobPostingRepository,
    MockSkillRepository,
    MockAdminRepository,
>;

struct Mocks {
    links: MockAssociationRepository,
    users: MockUserRepository,
    jobs: MockJobPostingRepository,
    skills: MockSkillRepository,
    admins: MockAdminRepository,
}

impl Mocks {
    fn into_service(self) -> Service {
        AssociationService::new(
            Arc::new(self.links),
            Arc::new(self.users),
            Arc::new(self.jobs),
            Arc::new(self.skills),
            Arc::new(self.admins),
        )
    }
}

fn user(id: UserId) -> User {
    User::from_profile(
        id,
        UserProfile {
            name: "Ada".into(),
            national_id: "20123456".into(),
            email: format!("user{}@example.com", id.get()),
            phone: "555".into(),
            work_area: "Engineering".into(),
            education_level: "University".into(),
        },
        PasswordHash::new("hash"),
    )
}

fn posting(id: JobPostingId) -> JobPosting {
    JobPosting {
        id,
        title: "Engineer".into(),
        description: "Build".into(),
        work_mode: "remote".into(),
        salary: 100.0,
        openings: 1,
        company_id: CompanyId::new(1),
    }
}

fn skill(id: SkillId) -> Skill {
    Skill {
        id,
        name: "Python".into(),
    }
}

/// Mocks where user 1, job 1, skill 1, and admin 1 exist.
#[fixture]
fn mocks() -> Mocks {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .returning(|id| Ok((id.get() == 1).then(|| user(id))));
    let mut jobs = MockJobPostingRepository::new();
    jobs.expect_find_by_id()
        .returning(|id| Ok((id.get() == 1).then(|| posting(id))));
    let mut skills = MockSkillRepository::new();
    skills
        .expect_find_by_id()
        .returning(|id| Ok((id.get() == 1).then(|| skill(id))));
    let mut admins = MockAdminRepository::new();
    admins.expect_find_by_id().returning(|id| {
        Ok((id.get() == 1).then(|| {
            Admin::from_profile(
                id,
                AdminProfile {
                    name: "Boss".into(),
                    national_id: "111".into(),
                    email: "a@x.com".into(),
                    phone: "555".into(),
                },
                PasswordHash::new("hash"),
            )
        }))
    });
    Mocks {
        links: MockAssociationRepository::new(),
        users,
        jobs,
        skills,
        admins,
    }
}

#[rstest]
#[tokio::test]
async fn adding_a_user_skill_inserts_the_pair(mut mocks: Mocks) {
    mocks
        .links
        .expect_add_user_skill()
        .withf(|user_id, skill_id| user_id.get() == 1 && skill_id.get() == 1)
        .times(1)
        .returning(|_, _| Ok(()));

    mocks
        .into_service()
        .add_user_skill(UserId::new(1), SkillId::new(1))
        .await
        .expect("added");
}

#[rstest]
#[tokio::test]
async fn repeated_user_skill_is_conflict(mut mocks: Mocks) {
    mocks
        .links
        .expect_add_user_skill()
        .return_once(|_, _| Err(AssociationRepositoryError::duplicate()));

    let error = mocks
        .into_service()
        .add_user_skill(UserId::new(1), SkillId::new(1))
        .await
        .expect_err("duplicate");
    assert_eq!(error.code(), ErrorCode::Conflict);
    assert_eq!(error.message(), "User already has this skill");
}

#[rstest]
#[case::missing_user(2, 1, "User not found")]
#[case::missing_skill(1, 2, "Skill not found")]
#[tokio::test]
async fn dangling_ids_are_not_found(
    mut mocks: Mocks,
    #[case] user_id: i64,
    #[case] skill_id: i64,
    #[case] message: &str,
) {
    mocks.links.expect_add_user_skill().never();

    let error = mocks
        .into_service()
        .add_user_skill(UserId::new(user_id), SkillId::new(skill_id))
        .await
        .expect_err("missing");
    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), message);
}

#[rstest]
#[tokio::test]
async fn removing_an_absent_job_skill_is_conflict(mut mocks: Mocks) {
    mocks
        .links
        .expect_remove_job_skill()
        .return_once(|_, _| Ok(false));

    let error = mocks
        .into_service()
        .remove_job_skill(JobPostingId::new(1), SkillId::new(1))
        .await
        .expect_err("absent");
    assert_eq!(error.code(), ErrorCode::Conflict);
    assert_eq!(error.details().expect("details")["code"], "not_associated");
}

#[rstest]
#[tokio::test]
async fn clearing_job_skills_reports_removed_rows(mut mocks: Mocks) {
    mocks
        .links
        .expect_clear_job_skills()
        .return_once(|_| Ok(3));

    let removed = mocks
        .into_service()
        .clear_job_skills(JobPostingId::new(1))
        .await
        .expect("cleared");
    assert_eq!(removed, 3);
}

#[rstest]
#[tokio::test]
async fn applying_twice_is_conflict(mut mocks: Mocks) {
    mocks
        .links
        .expect_add_application()
        .return_once(|_, _| Err(AssociationRepositoryError::duplicate()));

    let error = mocks
        .into_service()
        .apply(JobPostingId::new(1), UserId::new(1))
        .await
        .expect_err("duplicate");
    assert_eq!(error.code(), ErrorCode::Conflict);
}

#[rstest]
#[tokio::test]
async fn listing_skills_of_a_missing_job_is_not_found(mut mocks: Mocks) {
    mocks.links.expect_list_job_skills().never();

    let error = mocks
        .into_service()
        .list_job_skills(JobPostingId::new(9))
        .await
        .expect_err("missing");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn jobs_with_applicants_pairs_each_posting(mut mocks: Mocks) {
    mocks
        .jobs
        .expect_list_by_admin()
        .return_once(|_| Ok(vec![posting(JobPostingId::new(1)), posting(JobPostingId::new(2))]));
    mocks
        .links
        .expect_list_job_applicants()
        .times(2)
        .returning(|job_id| {
            if job_id.get() == 1 {
                Ok(vec![user(UserId::new(1))])
            } else {
                Ok(Vec::new())
            }
        });

    let detailed = mocks
        .into_service()
        .list_jobs_with_applicants(AdminId::new(1))
        .await
        .expect("listing");
    assert_eq!(detailed.len(), 2);
    assert_eq!(detailed[0].applicants.len(), 1);
    assert!(detailed[1].applicants.is_empty());
}

#[rstest]
#[tokio::test]
async fn jobs_with_applicants_for_missing_admin_is_not_found(mut mocks: Mocks) {
    mocks.jobs.expect_list_by_admin().never();

    let error = mocks
        .into_service()
        .list_jobs_with_applicants(AdminId::new(5))
        .await
        .expect_err("missing admin");
    assert_eq!(error.code(), ErrorCode::NotFound);
}
