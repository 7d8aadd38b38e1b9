use chrono::{DateTime, Utc};

use crate::errors::Result;
use crate::schedule::schedule_model::{
    NewScheduledWorkout, ScheduleFilters, ScheduledWorkout, ScheduledWorkoutUpdate, StartedWorkout,
};
use async_trait::async_trait;

/// Trait for scheduled workout repository operations, scoped to the owner.
#[async_trait]
pub trait ScheduledWorkoutRepositoryTrait: Send + Sync {
    /// Matching entries ordered by (date, time), exercises expanded.
    fn list_for_user(
        &self,
        user_id: &str,
        filters: &ScheduleFilters,
    ) -> Result<Vec<ScheduledWorkout>>;
    fn find_for_user(&self, user_id: &str, scheduled_id: &str) -> Result<Option<ScheduledWorkout>>;
    async fn insert(&self, user_id: &str, new: NewScheduledWorkout) -> Result<ScheduledWorkout>;
    async fn update(
        &self,
        user_id: &str,
        scheduled_id: &str,
        update: ScheduledWorkoutUpdate,
    ) -> Result<ScheduledWorkout>;
    async fn delete(&self, user_id: &str, scheduled_id: &str) -> Result<usize>;
    /// Sets `is_completed` unconditionally.
    async fn complete(&self, user_id: &str, scheduled_id: &str) -> Result<ScheduledWorkout>;
    /// Atomically: verify no workout is linked yet, create one (status
    /// STARTED, start time `now`), and link it. The check and both writes
    /// run in a single transaction, so a concurrent second start observes
    /// the link and fails with `ValidationError::AlreadyStarted`.
    async fn start(
        &self,
        user_id: &str,
        scheduled_id: &str,
        now: DateTime<Utc>,
    ) -> Result<StartedWorkout>;
}

/// Trait for schedule service operations.
#[async_trait]
pub trait ScheduleServiceTrait: Send + Sync {
    fn list_scheduled(&self, user_id: &str) -> Result<Vec<ScheduledWorkout>>;
    fn get_scheduled(&self, user_id: &str, scheduled_id: &str) -> Result<ScheduledWorkout>;
    async fn create_scheduled(
        &self,
        user_id: &str,
        new: NewScheduledWorkout,
    ) -> Result<ScheduledWorkout>;
    async fn update_scheduled(
        &self,
        user_id: &str,
        scheduled_id: &str,
        update: ScheduledWorkoutUpdate,
    ) -> Result<ScheduledWorkout>;
    async fn delete_scheduled(&self, user_id: &str, scheduled_id: &str) -> Result<()>;
    async fn complete_scheduled(&self, user_id: &str, scheduled_id: &str)
        -> Result<ScheduledWorkout>;
    async fn start_scheduled(&self, user_id: &str, scheduled_id: &str) -> Result<StartedWorkout>;
    /// Pending entries dated within [today, tomorrow], ordered (date, time).
    /// The comparison is by calendar date, not elapsed duration.
    fn upcoming(&self, user_id: &str, now: DateTime<Utc>) -> Result<Vec<ScheduledWorkout>>;
}
