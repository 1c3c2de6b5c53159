//! Shared helpers for Diesel repository implementations.
//!
//! Each repository translates failures into its own port error. The
//! classification of Diesel and pool errors happens once here so every
//! adapter agrees on which constraint maps to which domain failure.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::{debug, warn};

use crate::domain::ports::UniqueKey;

use super::pool::PoolError;

/// Storage failure reduced to the cases repositories distinguish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StoreFailure {
    /// The connection dropped or could not be checked out.
    Connection(String),
    /// A unique constraint rejected the write.
    UniqueViolation { constraint: Option<String> },
    /// A foreign key rejected the write or delete.
    ForeignKeyViolation { constraint: Option<String> },
    /// Anything else.
    Query(String),
}

/// Extract a readable message from a pool error.
pub(crate) fn map_pool_error_message(error: PoolError) -> String {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    }
}

/// Classify a Diesel error and emit debug context.
pub(crate) fn classify_diesel_error(error: DieselError) -> StoreFailure {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                constraint = ?info.constraint_name(),
                "diesel operation failed"
            );
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => StoreFailure::Query("record not found".to_owned()),
        DieselError::QueryBuilderError(_) => StoreFailure::Query("database query error".to_owned()),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            StoreFailure::Connection("database connection error".to_owned())
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            StoreFailure::UniqueViolation {
                constraint: info.constraint_name().map(str::to_owned),
            }
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
            StoreFailure::ForeignKeyViolation {
                constraint: info.constraint_name().map(str::to_owned),
            }
        }
        _ => StoreFailure::Query("database error".to_owned()),
    }
}

/// Resolve the unique key guarded by a named constraint.
///
/// Constraint names follow PostgreSQL's `<table>_<column>_key` convention.
pub(crate) fn unique_key_for(constraint: Option<&str>) -> Option<UniqueKey> {
    let name = constraint?;
    if name.ends_with("_email_key") {
        Some(UniqueKey::Email)
    } else if name.ends_with("_national_id_key") {
        Some(UniqueKey::NationalId)
    } else if name == "skills_name_key" {
        Some(UniqueKey::SkillName)
    } else {
        warn!(
            constraint = name,
            "unrecognised unique constraint - may need specific error mapping"
        );
        None
    }
}
