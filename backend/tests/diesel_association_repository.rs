//! Integration tests for `DieselAssociationRepository` against embedded
//! PostgreSQL.
//!
//! Duplicate pairs are rejected by the join tables' primary keys; there is
//! no pre-check in the adapter.

use jobscout::domain::ports::{
    AssociationRepository, AssociationRepositoryError, SkillRepository, SkillRepositoryError,
    UniqueKey,
};
use jobscout::domain::{JobPosting, NewSkill, SkillId, User};
use rstest::{fixture, rstest};

mod support;

use support::{DieselStores, diesel_stores};

#[fixture]
fn stores() -> Option<DieselStores> {
    diesel_stores()
}

async fn board(stores: &DieselStores) -> (User, JobPosting) {
    let admin = stores.seed_admin("grace@example.org", "111").await;
    let company = stores.seed_company(admin.id).await;
    let job = stores.seed_posting(company.id).await;
    let user = stores.seed_user("ada@example.org", "222").await;
    (user, job)
}

#[rstest]
fn skill_names_are_unique(stores: Option<DieselStores>) {
    let Some(stores) = stores else {
        eprintln!("SKIP-TEST-CLUSTER: skill_names_are_unique skipped");
        return;
    };

    stores.runtime.block_on(async {
        stores.seed_skill("Python").await;
        let error = stores
            .skills
            .insert(&NewSkill::new("Python").expect("valid name"))
            .await
            .expect_err("duplicate");
        assert_eq!(error, SkillRepositoryError::duplicate(UniqueKey::SkillName));
        stores.seed_skill("python").await;
    });
}

#[rstest]
fn job_skill_round_trip(stores: Option<DieselStores>) {
    let Some(stores) = stores else {
        eprintln!("SKIP-TEST-CLUSTER: job_skill_round_trip skipped");
        return;
    };

    stores.runtime.block_on(async {
        let (_, job) = board(&stores).await;
        let python = stores.seed_skill("Python").await;

        stores
            .links
            .add_job_skill(job.id, python.id)
            .await
            .expect("link");
        let names: Vec<_> = stores
            .links
            .list_job_skills(job.id)
            .await
            .expect("list")
            .into_iter()
            .map(|skill| skill.name)
            .collect();
        assert_eq!(names, vec!["Python".to_owned()]);

        assert!(stores.links.remove_job_skill(job.id, python.id).await.expect("remove"));
        assert!(!stores.links.remove_job_skill(job.id, python.id).await.expect("remove again"));
        assert!(stores.links.list_job_skills(job.id).await.expect("list").is_empty());
    });
}

#[rstest]
fn pairs_are_stored_at_most_once(stores: Option<DieselStores>) {
    let Some(stores) = stores else {
        eprintln!("SKIP-TEST-CLUSTER: pairs_are_stored_at_most_once skipped");
        return;
    };

    stores.runtime.block_on(async {
        let (user, job) = board(&stores).await;
        let skill = stores.seed_skill("Rust").await;

        stores.links.add_user_skill(user.id, skill.id).await.expect("first");
        let error = stores
            .links
            .add_user_skill(user.id, skill.id)
            .await
            .expect_err("second");
        assert_eq!(error, AssociationRepositoryError::Duplicate);

        stores.links.add_job_skill(job.id, skill.id).await.expect("first");
        let error = stores
            .links
            .add_job_skill(job.id, skill.id)
            .await
            .expect_err("second");
        assert_eq!(error, AssociationRepositoryError::Duplicate);

        stores.links.add_application(user.id, job.id).await.expect("first");
        let error = stores
            .links
            .add_application(user.id, job.id)
            .await
            .expect_err("second");
        assert_eq!(error, AssociationRepositoryError::Duplicate);

        let applied = stores
            .links
            .list_user_applications(user.id)
            .await
            .expect("applications");
        assert_eq!(applied.len(), 1);
        assert_eq!(applied.first().map(|row| row.id), Some(job.id));
    });
}

#[rstest]
fn removing_an_absent_pair_reports_false(stores: Option<DieselStores>) {
    let Some(stores) = stores else {
        eprintln!("SKIP-TEST-CLUSTER: removing_an_absent_pair_reports_false skipped");
        return;
    };

    stores.runtime.block_on(async {
        let (user, _) = board(&stores).await;
        let skill = stores.seed_skill("Go").await;
        let removed = stores
            .links
            .remove_user_skill(user.id, skill.id)
            .await
            .expect("remove");
        assert!(!removed);
    });
}

#[rstest]
fn linking_a_missing_skill_is_a_missing_reference(stores: Option<DieselStores>) {
    let Some(stores) = stores else {
        eprintln!("SKIP-TEST-CLUSTER: linking_a_missing_skill_is_a_missing_reference skipped");
        return;
    };

    stores.runtime.block_on(async {
        let (user, _) = board(&stores).await;
        let error = stores
            .links
            .add_user_skill(user.id, SkillId::new(404))
            .await
            .expect_err("missing skill");
        assert!(matches!(
            error,
            AssociationRepositoryError::MissingReference { .. }
        ));
    });
}

#[rstest]
fn clearing_job_skills_reports_the_count(stores: Option<DieselStores>) {
    let Some(stores) = stores else {
        eprintln!("SKIP-TEST-CLUSTER: clearing_job_skills_reports_the_count skipped");
        return;
    };

    stores.runtime.block_on(async {
        let (_, job) = board(&stores).await;
        for name in ["Python", "SQL"] {
            let skill = stores.seed_skill(name).await;
            stores
                .links
                .add_job_skill(job.id, skill.id)
                .await
                .expect("link");
        }

        assert_eq!(stores.links.clear_job_skills(job.id).await.expect("clear"), 2);
        assert_eq!(stores.links.clear_job_skills(job.id).await.expect("clear again"), 0);
        assert_eq!(stores.skills.list().await.expect("catalogue").len(), 2);
    });
}

#[rstest]
fn deleting_a_skill_unlinks_it_everywhere(stores: Option<DieselStores>) {
    let Some(stores) = stores else {
        eprintln!("SKIP-TEST-CLUSTER: deleting_a_skill_unlinks_it_everywhere skipped");
        return;
    };

    stores.runtime.block_on(async {
        let (user, job) = board(&stores).await;
        let skill = stores.seed_skill("Python").await;
        stores.links.add_user_skill(user.id, skill.id).await.expect("user link");
        stores.links.add_job_skill(job.id, skill.id).await.expect("job link");

        assert!(stores.skills.delete(skill.id).await.expect("delete").is_some());
        assert!(stores.links.list_user_skills(user.id).await.expect("user").is_empty());
        assert!(stores.links.list_job_skills(job.id).await.expect("job").is_empty());
    });
}
