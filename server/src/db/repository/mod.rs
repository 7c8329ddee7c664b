//! Repository Module
//!
//! Hand-written SQL per entity over the shared [`sqlx::SqlitePool`].
//! Compound operations (cascades, association sync, employee delete with
//! junction cleanup) run inside a single transaction: the guard commits
//! explicitly and rolls back on every other exit path when dropped.

pub mod employee;
pub mod menu;
pub mod restaurant;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db) = err {
            // Duplicate association pair, or a menu claimed by two restaurants
            if db.is_unique_violation() {
                return RepoError::Conflict(db.message().to_string());
            }
            // Junction row pointing at a row that does not exist
            if db.is_foreign_key_violation() {
                return RepoError::Validation(db.message().to_string());
            }
        }
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
