//! Embedded PostgreSQL provisioning for integration tests.
//!
//! A template database is migrated once per migration set, keyed by a hash
//! of `backend/migrations`; every test then clones it into a temporary
//! database that is dropped with its handle.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use jobscout::outbound::persistence::run_migrations;
use pg_embedded_setup_unpriv::test_support::{hash_directory, shared_cluster_handle};
use pg_embedded_setup_unpriv::{ClusterHandle, TemporaryDatabase};
use tokio::runtime::Runtime;
use uuid::Uuid;

const TEMPLATE_NAME_PREFIX: &str = "jobscout_template";

static TEMPLATE_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn migrations_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("migrations")
}

/// Cluster shared by every test in the process.
pub fn shared_cluster() -> Result<&'static ClusterHandle, String> {
    shared_cluster_handle().map_err(|err| format!("start embedded cluster: {err:?}"))
}

fn template_database_name() -> Result<String, String> {
    let hash = hash_directory(migrations_dir()).map_err(|err| format!("hash migrations: {err:?}"))?;
    let short_hash = hash.get(..8).unwrap_or(&hash);
    Ok(format!("{TEMPLATE_NAME_PREFIX}_{short_hash}"))
}

/// Create the template database and migrate it unless it already exists.
fn ensure_template_database(cluster: &ClusterHandle) -> Result<String, String> {
    let template_name = template_database_name()?;
    let _lock = TEMPLATE_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|err| err.into_inner());

    let exists = cluster
        .database_exists(template_name.as_str())
        .map_err(|err| format!("template check: {err:?}"))?;
    if !exists {
        cluster
            .create_database(template_name.as_str())
            .map_err(|err| format!("create template: {err:?}"))?;
        let url = cluster.connection().database_url(&template_name);
        // Migrations run on their own runtime so callers may hold another.
        let runtime = Runtime::new().map_err(|err| err.to_string())?;
        runtime
            .block_on(run_migrations(&url))
            .map_err(|err| format!("migrate template: {err}"))?;
    }
    Ok(template_name)
}

/// Temporary database cloned from the migrated template.
pub fn provision_database(cluster: &ClusterHandle) -> Result<TemporaryDatabase, String> {
    let template_name = ensure_template_database(cluster)?;
    let database_name = format!("test_{}", Uuid::new_v4().simple());
    cluster
        .temporary_database_from_template(database_name.as_str(), template_name.as_str())
        .map_err(|err| format!("create database from template: {err:?}"))
}
