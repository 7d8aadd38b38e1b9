//! Storage-specific error types for SQLite operations.
//!
//! Wraps Diesel and r2d2 errors and converts them to the
//! database-agnostic error types defined in `trainlog_core`.

use diesel::result::Error as DieselError;
use thiserror::Error;
use trainlog_core::errors::{DatabaseError, Error};

/// Storage-internal errors; converted to `trainlog_core::Error` before
/// being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[from] diesel::ConnectionError),

    #[error("Connection pool error: {0}")]
    PoolError(#[from] r2d2::Error),

    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] DieselError),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// A stored value could not be mapped to its domain type (e.g. an
    /// unknown enum string).
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// A core error produced inside a writer job. Carried whole so the
    /// original variant (NotFound, Validation, ...) survives the
    /// transaction wrapper's error type.
    #[error("{0}")]
    CoreError(Error),
}

impl From<Error> for StorageError {
    fn from(err: Error) -> Self {
        StorageError::CoreError(err)
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ConnectionFailed(e) => {
                Error::Database(DatabaseError::ConnectionFailed(e.to_string()))
            }
            StorageError::PoolError(e) => {
                Error::Database(DatabaseError::PoolCreationFailed(e.to_string()))
            }
            StorageError::QueryFailed(DieselError::NotFound) => {
                Error::Database(DatabaseError::NotFound("Record not found".to_string()))
            }
            StorageError::QueryFailed(DieselError::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                info,
            )) => Error::Database(DatabaseError::UniqueViolation(info.message().to_string())),
            StorageError::QueryFailed(DieselError::DatabaseError(
                diesel::result::DatabaseErrorKind::ForeignKeyViolation,
                info,
            )) => Error::Database(DatabaseError::ForeignKeyViolation(
                info.message().to_string(),
            )),
            StorageError::QueryFailed(e) => {
                Error::Database(DatabaseError::QueryFailed(e.to_string()))
            }
            StorageError::MigrationFailed(e) => Error::Database(DatabaseError::MigrationFailed(e)),
            StorageError::SerializationError(e) => Error::Database(DatabaseError::Internal(e)),
            StorageError::CoreError(e) => e,
        }
    }
}

/// Extension trait to convert Diesel results to core results at the call
/// site (orphan rules prevent `From<DieselError> for Error`).
pub trait IntoCore<T> {
    fn into_core(self) -> trainlog_core::Result<T>;
}

impl<T> IntoCore<T> for std::result::Result<T, DieselError> {
    fn into_core(self) -> trainlog_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}
