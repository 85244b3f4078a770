//! Helpers for recognizing specific PostgreSQL constraint failures.

/// Unique constraint on `bootcamp.bootcamps(name)`.
pub const BOOTCAMP_NAME_KEY: &str = "bootcamps_name_key";

/// Foreign key from `bootcamp.bootcamp_capability(capability_id)`.
pub const BOOTCAMP_CAPABILITY_FK: &str = "bootcamp_capability_capability_id_fkey";

pub fn is_unique_violation_on(e: &sqlx::Error, constraint: &str) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err.constraint() == Some(constraint)
}

pub fn is_foreign_key_violation_on(e: &sqlx::Error, constraint: &str) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_foreign_key_violation() {
        return false;
    }

    db_err.constraint() == Some(constraint)
}
