use chrono::{DateTime, NaiveDate, Utc};

use crate::errors::Result;
use crate::workouts::workouts_model::{
    NewWorkout, Workout, WorkoutDetail, WorkoutSummary, WorkoutUpdate,
};
use async_trait::async_trait;

/// Trait for workout repository operations. Every query is scoped to the
/// given owner; a workout of another user is indistinguishable from a
/// missing one.
#[async_trait]
pub trait WorkoutRepositoryTrait: Send + Sync {
    /// All workouts of the user, newest first by start time.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Workout>>;
    /// Workouts whose start time falls on a calendar date within
    /// `[date_from, date_to]` (inclusive), ascending by start time.
    fn list_between(
        &self,
        user_id: &str,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<Vec<Workout>>;
    fn find_for_user(&self, user_id: &str, workout_id: &str) -> Result<Option<Workout>>;
    /// Inserts a new workout with status STARTED and the given start time.
    async fn insert(
        &self,
        user_id: &str,
        new_workout: NewWorkout,
        start_time: DateTime<Utc>,
    ) -> Result<Workout>;
    async fn update(
        &self,
        user_id: &str,
        workout_id: &str,
        update: WorkoutUpdate,
    ) -> Result<Workout>;
    /// Marks the workout FINISHED and records the end time.
    async fn finish(
        &self,
        user_id: &str,
        workout_id: &str,
        end_time: DateTime<Utc>,
    ) -> Result<Workout>;
    async fn delete(&self, user_id: &str, workout_id: &str) -> Result<usize>;
}

/// Trait for workout service operations.
#[async_trait]
pub trait WorkoutServiceTrait: Send + Sync {
    fn list_workouts(&self, user_id: &str) -> Result<Vec<WorkoutSummary>>;
    fn get_workout(&self, user_id: &str, workout_id: &str) -> Result<WorkoutDetail>;
    async fn create_workout(&self, user_id: &str, new_workout: NewWorkout) -> Result<WorkoutSummary>;
    async fn update_workout(
        &self,
        user_id: &str,
        workout_id: &str,
        update: WorkoutUpdate,
    ) -> Result<WorkoutSummary>;
    async fn finish_workout(&self, user_id: &str, workout_id: &str) -> Result<WorkoutDetail>;
    async fn delete_workout(&self, user_id: &str, workout_id: &str) -> Result<()>;
}
