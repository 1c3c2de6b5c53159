//! Regression coverage for the in-memory store.

use rstest::{fixture, rstest};

use super::InMemoryStore;
use crate::domain::ports::{
    AdminRepository, AdminRepositoryError, AssociationRepository, AssociationRepositoryError,
    CompanyRepository, CompanyRepositoryError, ExperienceRepository, JobPostingRepository,
    SkillRepository, SkillRepositoryError, UniqueKey, UserRepository, UserRepositoryError,
};
use crate::domain::{
    AdminChanges, AdminId, AdminProfile, CompanyId, NewCompany, NewExperience, NewJobPosting,
    NewSkill, PasswordHash, UserChanges, UserId, UserProfile,
};

fn admin_profile(email: &str, national_id: &str) -> AdminProfile {
    AdminProfile {
        name: "Boss".into(),
        national_id: national_id.into(),
        email: email.into(),
        phone: "555".into(),
    }
}

fn user_profile(email: &str, national_id: &str) -> UserProfile {
    UserProfile {
        name: "Ada".into(),
        national_id: national_id.into(),
        email: email.into(),
        phone: "555".into(),
        work_area: "Engineering".into(),
        education_level: "University".into(),
    }
}

fn company(admin_id: AdminId) -> NewCompany {
    NewCompany {
        name: "Acme".into(),
        description: "Widgets".into(),
        city: "Recife".into(),
        postal_code: "50000-000".into(),
        employee_count: 10,
        years_active: 3,
        admin_id,
    }
}

fn posting(company_id: CompanyId) -> NewJobPosting {
    NewJobPosting {
        title: "Engineer".into(),
        description: "Build things".into(),
        work_mode: "remote".into(),
        salary: 5000.0,
        openings: 2,
        company_id,
    }
}

fn hash() -> PasswordHash {
    PasswordHash::new("hash")
}

#[fixture]
fn store() -> InMemoryStore {
    InMemoryStore::new()
}

#[rstest]
#[case::email("a@x.com", "222", UniqueKey::Email)]
#[case::national_id("b@x.com", "111", UniqueKey::NationalId)]
#[tokio::test]
async fn admin_unique_keys_are_enforced(
    store: InMemoryStore,
    #[case] email: &str,
    #[case] national_id: &str,
    #[case] key: UniqueKey,
) {
    AdminRepository::insert(&store, &admin_profile("a@x.com", "111"), &hash())
        .await
        .expect("first admin");
    let error = AdminRepository::insert(&store, &admin_profile(email, national_id), &hash())
        .await
        .expect_err("duplicate");
    assert_eq!(error, AdminRepositoryError::duplicate(key));
}

#[rstest]
#[tokio::test]
async fn admins_and_users_do_not_share_unique_keys(store: InMemoryStore) {
    AdminRepository::insert(&store, &admin_profile("a@x.com", "111"), &hash())
        .await
        .expect("admin");
    let user = UserRepository::insert(&store, &user_profile("a@x.com", "111"), &hash())
        .await
        .expect("user with same keys");
    assert_eq!(user.id, UserId::new(1));
}

#[rstest]
#[tokio::test]
async fn ids_are_assigned_in_sequence(store: InMemoryStore) {
    let first = AdminRepository::insert(&store, &admin_profile("a@x.com", "1"), &hash())
        .await
        .expect("first");
    let second = AdminRepository::insert(&store, &admin_profile("b@x.com", "2"), &hash())
        .await
        .expect("second");
    assert_eq!((first.id.get(), second.id.get()), (1, 2));
}

#[rstest]
#[tokio::test]
async fn empty_update_leaves_record_unchanged(store: InMemoryStore) {
    let admin = AdminRepository::insert(&store, &admin_profile("a@x.com", "111"), &hash())
        .await
        .expect("admin");
    let updated = AdminRepository::update(&store, admin.id, &AdminChanges::default())
        .await
        .expect("update")
        .expect("present");
    assert_eq!(updated, admin);
}

#[rstest]
#[tokio::test]
async fn user_may_keep_own_email_on_update(store: InMemoryStore) {
    let user = UserRepository::insert(&store, &user_profile("u@x.com", "222"), &hash())
        .await
        .expect("user");
    let changes = UserChanges {
        email: Some("u@x.com".into()),
        phone: Some("999".into()),
        ..UserChanges::default()
    };
    let updated = UserRepository::update(&store, user.id, &changes)
        .await
        .expect("update")
        .expect("present");
    assert_eq!(updated.phone, "999");
}

#[rstest]
#[tokio::test]
async fn user_update_rejects_taken_email(store: InMemoryStore) {
    UserRepository::insert(&store, &user_profile("u@x.com", "1"), &hash())
        .await
        .expect("first");
    let second = UserRepository::insert(&store, &user_profile("v@x.com", "2"), &hash())
        .await
        .expect("second");
    let changes = UserChanges {
        email: Some("u@x.com".into()),
        ..UserChanges::default()
    };
    let error = UserRepository::update(&store, second.id, &changes)
        .await
        .expect_err("taken");
    assert_eq!(error, UserRepositoryError::duplicate(UniqueKey::Email));
}

#[rstest]
#[tokio::test]
async fn deleting_user_cascades_to_owned_rows(store: InMemoryStore) {
    let admin = AdminRepository::insert(&store, &admin_profile("a@x.com", "111"), &hash())
        .await
        .expect("admin");
    let company = CompanyRepository::insert(&store, &company(admin.id))
        .await
        .expect("company");
    let job = JobPostingRepository::insert(&store, &posting(company.id))
        .await
        .expect("job");
    let skill = SkillRepository::insert(&store, &NewSkill::new("Rust").expect("skill"))
        .await
        .expect("skill");
    let user = UserRepository::insert(&store, &user_profile("u@x.com", "222"), &hash())
        .await
        .expect("user");
    ExperienceRepository::insert(
        &store,
        &NewExperience {
            company_name: "Initech".into(),
            role: "Dev".into(),
            years: 2,
            user_id: user.id,
        },
    )
    .await
    .expect("experience");
    store.add_user_skill(user.id, skill.id).await.expect("skill link");
    store.add_application(user.id, job.id).await.expect("apply");

    UserRepository::delete(&store, user.id)
        .await
        .expect("delete")
        .expect("present");

    assert!(
        ExperienceRepository::list_by_user(&store, user.id)
            .await
            .expect("list")
            .is_empty()
    );
    assert!(store.list_job_applicants(job.id).await.expect("list").is_empty());
    assert!(store.list_user_skills(user.id).await.expect("list").is_empty());
}

#[rstest]
#[tokio::test]
async fn owners_with_dependants_cannot_be_deleted(store: InMemoryStore) {
    let admin = AdminRepository::insert(&store, &admin_profile("a@x.com", "111"), &hash())
        .await
        .expect("admin");
    let company = CompanyRepository::insert(&store, &company(admin.id))
        .await
        .expect("company");
    JobPostingRepository::insert(&store, &posting(company.id))
        .await
        .expect("job");

    let company_error = CompanyRepository::delete(&store, company.id)
        .await
        .expect_err("restricted");
    assert_eq!(
        company_error,
        CompanyRepositoryError::still_referenced("job_postings")
    );
    let admin_error = AdminRepository::delete(&store, admin.id)
        .await
        .expect_err("restricted");
    assert_eq!(
        admin_error,
        AdminRepositoryError::still_referenced("companies")
    );
}

#[rstest]
#[tokio::test]
async fn company_requires_existing_admin(store: InMemoryStore) {
    let error = CompanyRepository::insert(&store, &company(AdminId::new(9)))
        .await
        .expect_err("dangling");
    assert_eq!(
        error,
        CompanyRepositoryError::missing_admin(AdminId::new(9))
    );
}

#[rstest]
#[tokio::test]
async fn skill_names_are_unique(store: InMemoryStore) {
    let skill = NewSkill::new("Python").expect("skill");
    SkillRepository::insert(&store, &skill).await.expect("first");
    let error = SkillRepository::insert(&store, &skill)
        .await
        .expect_err("duplicate");
    assert_eq!(error, SkillRepositoryError::duplicate(UniqueKey::SkillName));
}

#[rstest]
#[tokio::test]
async fn job_skill_scenario_round_trips(store: InMemoryStore) {
    let admin = AdminRepository::insert(&store, &admin_profile("a@x.com", "111"), &hash())
        .await
        .expect("admin");
    let company = CompanyRepository::insert(&store, &company(admin.id))
        .await
        .expect("company");
    let job = JobPostingRepository::insert(&store, &posting(company.id))
        .await
        .expect("job");
    let python = SkillRepository::insert(&store, &NewSkill::new("Python").expect("skill"))
        .await
        .expect("skill");

    store.add_job_skill(job.id, python.id).await.expect("add");
    let names: Vec<String> = store
        .list_job_skills(job.id)
        .await
        .expect("list")
        .into_iter()
        .map(|skill| skill.name)
        .collect();
    assert_eq!(names, vec!["Python".to_owned()]);

    assert_eq!(
        store.add_job_skill(job.id, python.id).await,
        Err(AssociationRepositoryError::duplicate())
    );
    assert!(store.remove_job_skill(job.id, python.id).await.expect("remove"));
    assert!(store.list_job_skills(job.id).await.expect("list").is_empty());
    assert!(!store.remove_job_skill(job.id, python.id).await.expect("absent"));
}

#[rstest]
#[tokio::test]
async fn clearing_job_skills_reports_removed_rows(store: InMemoryStore) {
    let admin = AdminRepository::insert(&store, &admin_profile("a@x.com", "111"), &hash())
        .await
        .expect("admin");
    let company = CompanyRepository::insert(&store, &company(admin.id))
        .await
        .expect("company");
    let job = JobPostingRepository::insert(&store, &posting(company.id))
        .await
        .expect("job");
    for name in ["Go", "Rust", "SQL"] {
        let skill = SkillRepository::insert(&store, &NewSkill::new(name).expect("skill"))
            .await
            .expect("skill");
        store.add_job_skill(job.id, skill.id).await.expect("add");
    }

    assert_eq!(store.clear_job_skills(job.id).await.expect("clear"), 3);
    assert_eq!(store.clear_job_skills(job.id).await.expect("clear"), 0);
}

#[rstest]
#[tokio::test]
async fn links_to_missing_rows_are_rejected(store: InMemoryStore) {
    let error = store
        .add_user_skill(UserId::new(4), crate::domain::SkillId::new(5))
        .await
        .expect_err("dangling");
    assert!(matches!(
        error,
        AssociationRepositoryError::MissingReference { .. }
    ));
}
