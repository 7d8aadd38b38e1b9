//! Exercises module - the shared + per-user exercise catalog.

mod exercises_model;
mod exercises_service;
mod exercises_traits;


pub use exercises_model::{Exercise, ExerciseUpdate, MuscleGroup, NewExercise};
pub use exercises_service::ExerciseService;
pub use exercises_traits::{ExerciseRepositoryTrait, ExerciseServiceTrait};
