//! SQLite storage implementation for trainlog.
//!
//! This crate is the only place where Diesel dependencies exist. It
//! implements the repository traits defined in `trainlog-core`:
//! connection pooling, embedded migrations, the single-writer actor, and
//! the per-entity repositories with their row models.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod exercises;
pub mod schedule;
pub mod sets;
pub mod users;
pub mod workouts;

// Re-export database utilities
pub use db::{create_pool, get_connection, run_migrations, spawn_writer, DbPool, WriteHandle};

// Re-export storage errors and conversion helpers
pub use errors::StorageError;

// Re-export the repository implementations
pub use exercises::ExerciseRepository;
pub use schedule::ScheduleRepository;
pub use sets::WorkoutSetRepository;
pub use users::UserRepository;
pub use workouts::WorkoutRepository;

// Re-export from trainlog-core for convenience
pub use trainlog_core::errors::{DatabaseError, Error, Result};
