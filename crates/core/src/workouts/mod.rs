//! Workouts module - training sessions and their lifecycle.

mod workouts_model;
mod workouts_service;
mod workouts_traits;


pub use workouts_model::{
    summarize_workout, ExerciseGroup, NewWorkout, SetInGroup, Workout, WorkoutDetail,
    WorkoutStatus, WorkoutSummary, WorkoutUpdate,
};
pub use workouts_service::WorkoutService;
pub use workouts_traits::{WorkoutRepositoryTrait, WorkoutServiceTrait};
