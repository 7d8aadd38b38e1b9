//! Sets module - individual logged sets within workouts.

mod sets_model;
mod sets_service;
mod sets_traits;

pub use sets_model::{
    NewWorkoutSet, SetWithExercise, WorkoutSet, WorkoutSetFilters, WorkoutSetUpdate,
};
pub use sets_service::WorkoutSetService;
pub use sets_traits::{WorkoutSetRepositoryTrait, WorkoutSetServiceTrait};
