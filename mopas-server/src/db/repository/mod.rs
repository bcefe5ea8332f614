//! Repository Module
//!
//! Plain async functions over a `SqlitePool`, one file per table.

pub mod member;

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    /// UNIQUE constraint rejected the write; carries the column when SQLite names it
    #[error("Duplicate: {}", .0.as_deref().unwrap_or("unknown column"))]
    Duplicate(Option<String>),

    /// CHECK / NOT NULL constraint rejected the write
    #[error("Constraint violated: {0}")]
    Constraint(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return RepoError::Duplicate(unique_violation_column(db_err.message()));
            }
            if db_err.is_check_violation() {
                return RepoError::Constraint(db_err.message().to_string());
            }
        }
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Duplicate(Some(column)) => {
                AppError::with_message(ErrorCode::DuplicateIdentity, duplicate_message(&column))
                    .with_detail("field", column)
            }
            RepoError::Duplicate(None) => AppError::new(ErrorCode::DuplicateIdentity),
            RepoError::Constraint(msg) => AppError::validation(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Extract the column from SQLite's `UNIQUE constraint failed: member.email`.
///
/// Composite constraints list several columns; only the first is kept.
fn unique_violation_column(message: &str) -> Option<String> {
    let columns = message.split("failed:").nth(1)?;
    let first = columns.split(',').next()?.trim();
    let column = first.rsplit('.').next()?.trim();
    (!column.is_empty()).then(|| column.to_string())
}

fn duplicate_message(column: &str) -> String {
    match column {
        "email" => "Email already exists.".to_string(),
        "group_code" => "Group code already exists.".to_string(),
        _ => ErrorCode::DuplicateIdentity.message().to_string(),
    }
}
