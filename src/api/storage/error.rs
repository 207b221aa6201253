//! Storage error types for the diagram storage backends.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::ValidationError;

/// Storage operation errors.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StorageError {
    /// Entity not found
    #[error("Entity not found: {entity_type} with id {entity_id}")]
    NotFound {
        entity_type: String,
        entity_id: String,
    },
    /// Field values rejected before reaching the backend
    #[error("Invalid data: {0}")]
    InvalidData(String),
    /// Database connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),
    /// General storage error
    #[error("Storage error: {0}")]
    Other(String),
}

impl StorageError {
    pub fn diagram_not_found(id: i64) -> Self {
        StorageError::NotFound {
            entity_type: "uml_diagram".to_string(),
            entity_id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound { .. })
    }
}

impl From<ValidationError> for StorageError {
    fn from(err: ValidationError) -> Self {
        StorageError::InvalidData(err.to_string())
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) => {
                from_sqlstate(db_err.code().as_deref(), err.to_string())
            }
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => StorageError::ConnectionError(err.to_string()),
            _ => StorageError::Other(err.to_string()),
        }
    }
}

/// Classify a database-side rejection by its SQLSTATE class.
///
/// Class 22 (data exception, e.g. a NUL byte in text or JSONB) and class 23
/// (integrity constraint violation) mean the submitted values were refused.
fn from_sqlstate(code: Option<&str>, message: String) -> StorageError {
    match code {
        Some(code) if code.starts_with("22") || code.starts_with("23") => {
            StorageError::InvalidData(message)
        }
        _ => StorageError::Other(message),
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        use rusqlite::ErrorCode;

        match &err {
            rusqlite::Error::SqliteFailure(failure, _) => match failure.code {
                ErrorCode::ConstraintViolation | ErrorCode::TooBig => {
                    StorageError::InvalidData(err.to_string())
                }
                ErrorCode::CannotOpen
                | ErrorCode::DatabaseBusy
                | ErrorCode::DatabaseLocked
                | ErrorCode::NotADatabase
                | ErrorCode::SystemIoFailure => StorageError::ConnectionError(err.to_string()),
                _ => StorageError::Other(err.to_string()),
            },
            _ => StorageError::Other(err.to_string()),
        }
    }
}
