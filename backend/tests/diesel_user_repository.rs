//! Integration tests for `DieselUserRepository` against embedded PostgreSQL.
//!
//! Covers the unique constraints that surface as duplicates and the cascade
//! that removes a user's experience, skills and applications with the user.

use jobscout::domain::{NewExperience, UserId};
use jobscout::domain::ports::{
    AssociationRepository, ExperienceRepository, SkillRepository, UniqueKey, UserRepository,
    UserRepositoryError,
};
use rstest::{fixture, rstest};

mod support;

use support::{DieselStores, diesel_stores, hash, user_profile};

#[fixture]
fn stores() -> Option<DieselStores> {
    diesel_stores()
}

#[rstest]
#[case::email("ada@example.org", "999", UniqueKey::Email)]
#[case::national_id("other@example.org", "222", UniqueKey::NationalId)]
fn duplicate_user_keys_name_the_constraint(
    stores: Option<DieselStores>,
    #[case] email: &str,
    #[case] national_id: &str,
    #[case] key: UniqueKey,
) {
    let Some(stores) = stores else {
        eprintln!("SKIP-TEST-CLUSTER: duplicate_user_keys_name_the_constraint skipped");
        return;
    };

    stores.runtime.block_on(async {
        stores.seed_user("ada@example.org", "222").await;
        let error = stores
            .users
            .insert(&user_profile(email, national_id), &hash())
            .await
            .expect_err("duplicate rejected");
        assert_eq!(error, UserRepositoryError::duplicate(key));
        assert_eq!(stores.users.list().await.expect("list").len(), 1);
    });
}

#[rstest]
fn user_email_may_match_an_admin(stores: Option<DieselStores>) {
    let Some(stores) = stores else {
        eprintln!("SKIP-TEST-CLUSTER: user_email_may_match_an_admin skipped");
        return;
    };

    stores.runtime.block_on(async {
        stores.seed_admin("shared@example.org", "111").await;
        let user = stores.seed_user("shared@example.org", "111").await;
        let found = stores
            .users
            .find_by_email("shared@example.org")
            .await
            .expect("lookup")
            .expect("user present");
        assert_eq!(found.id, user.id);
    });
}

#[rstest]
fn deleting_a_user_cascades_to_dependent_rows(stores: Option<DieselStores>) {
    let Some(stores) = stores else {
        eprintln!("SKIP-TEST-CLUSTER: deleting_a_user_cascades_to_dependent_rows skipped");
        return;
    };

    stores.runtime.block_on(async {
        let admin = stores.seed_admin("grace@example.org", "111").await;
        let company = stores.seed_company(admin.id).await;
        let job = stores.seed_posting(company.id).await;
        let skill = stores.seed_skill("Python").await;
        let user = stores.seed_user("ada@example.org", "222").await;

        stores
            .experiences
            .insert(&NewExperience {
                company_name: "Initech".into(),
                role: "Developer".into(),
                years: 2,
                user_id: user.id,
            })
            .await
            .expect("experience inserts");
        stores
            .links
            .add_user_skill(user.id, skill.id)
            .await
            .expect("skill links");
        stores
            .links
            .add_application(user.id, job.id)
            .await
            .expect("application inserts");

        let deleted = stores.users.delete(user.id).await.expect("delete");
        assert_eq!(deleted.map(|row| row.id), Some(user.id));

        assert!(
            stores
                .experiences
                .list_by_user(user.id)
                .await
                .expect("experiences")
                .is_empty()
        );
        assert!(
            stores
                .links
                .list_user_skills(user.id)
                .await
                .expect("skills")
                .is_empty()
        );
        assert!(
            stores
                .links
                .list_job_applicants(job.id)
                .await
                .expect("applicants")
                .is_empty()
        );
        assert_eq!(stores.skills.list().await.expect("skills").len(), 1);
    });
}

#[rstest]
fn deleting_a_missing_user_returns_none(stores: Option<DieselStores>) {
    let Some(stores) = stores else {
        eprintln!("SKIP-TEST-CLUSTER: deleting_a_missing_user_returns_none skipped");
        return;
    };

    stores.runtime.block_on(async {
        let deleted = stores
            .users
            .delete(UserId::new(404))
            .await
            .expect("delete");
        assert!(deleted.is_none());
    });
}
