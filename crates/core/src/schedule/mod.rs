//! Schedule module - planned sessions and the start/complete protocol.

mod schedule_model;
mod schedule_service;
mod schedule_traits;


pub use schedule_model::{
    NewScheduledWorkout, ScheduleFilters, ScheduledWorkout, ScheduledWorkoutUpdate, StartedWorkout,
};
pub use schedule_service::ScheduleService;
pub use schedule_traits::{ScheduledWorkoutRepositoryTrait, ScheduleServiceTrait};
