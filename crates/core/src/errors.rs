//! Core error types for the trainlog application.
//!
//! Storage-specific errors (from Diesel, SQLite, etc.) are converted to
//! these database-agnostic types by the storage layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Database-agnostic error type for storage operations.
///
/// All details are carried as `String` so the storage layer can convert
/// Diesel/r2d2 errors into this format without leaking its types.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found (or is not visible to the caller).
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate username).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A foreign key constraint was violated.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// A database transaction failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Catch-all for internal storage errors.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Input validation failures surfaced to the caller as client errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(String),

    #[error("{0}")]
    InvalidInput(String),

    /// Starting a scheduled workout that already has a linked workout.
    #[error("workout already started")]
    AlreadyStarted,
}

impl Error {
    /// Convenience constructor for the common not-found case.
    pub fn not_found(what: impl Into<String>) -> Self {
        Error::Database(DatabaseError::NotFound(what.into()))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Database(DatabaseError::NotFound(_)))
    }
}
