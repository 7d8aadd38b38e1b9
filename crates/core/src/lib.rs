//! Trainlog Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for the workout tracker.
//! It is database-agnostic and defines repository traits that are
//! implemented by the `storage-sqlite` crate. Every operation takes the
//! calling user's id explicitly; there is no ambient identity.

pub mod analytics;
#[cfg(test)]
pub(crate) mod testing;
pub mod errors;
pub mod exercises;
pub mod schedule;
pub mod sets;
pub mod users;
pub mod workouts;

pub use errors::Error;
pub use errors::Result;
