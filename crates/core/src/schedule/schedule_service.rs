use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::errors::{Error, Result};
use crate::schedule::schedule_model::{
    NewScheduledWorkout, ScheduleFilters, ScheduledWorkout, ScheduledWorkoutUpdate, StartedWorkout,
};
use crate::schedule::schedule_traits::{ScheduledWorkoutRepositoryTrait, ScheduleServiceTrait};

pub struct ScheduleService {
    schedule_repository: Arc<dyn ScheduledWorkoutRepositoryTrait>,
}

impl ScheduleService {
    pub fn new(schedule_repository: Arc<dyn ScheduledWorkoutRepositoryTrait>) -> Self {
        ScheduleService {
            schedule_repository,
        }
    }
}

#[async_trait]
impl ScheduleServiceTrait for ScheduleService {
    fn list_scheduled(&self, user_id: &str) -> Result<Vec<ScheduledWorkout>> {
        self.schedule_repository
            .list_for_user(user_id, &ScheduleFilters::default())
    }

    fn get_scheduled(&self, user_id: &str, scheduled_id: &str) -> Result<ScheduledWorkout> {
        self.schedule_repository
            .find_for_user(user_id, scheduled_id)?
            .ok_or_else(|| Error::not_found(format!("Scheduled workout {}", scheduled_id)))
    }

    async fn create_scheduled(
        &self,
        user_id: &str,
        new: NewScheduledWorkout,
    ) -> Result<ScheduledWorkout> {
        self.schedule_repository.insert(user_id, new).await
    }

    async fn update_scheduled(
        &self,
        user_id: &str,
        scheduled_id: &str,
        update: ScheduledWorkoutUpdate,
    ) -> Result<ScheduledWorkout> {
        self.schedule_repository
            .update(user_id, scheduled_id, update)
            .await
    }

    async fn delete_scheduled(&self, user_id: &str, scheduled_id: &str) -> Result<()> {
        let deleted = self
            .schedule_repository
            .delete(user_id, scheduled_id)
            .await?;
        if deleted == 0 {
            return Err(Error::not_found(format!(
                "Scheduled workout {}",
                scheduled_id
            )));
        }
        Ok(())
    }

    async fn complete_scheduled(
        &self,
        user_id: &str,
        scheduled_id: &str,
    ) -> Result<ScheduledWorkout> {
        self.schedule_repository
            .complete(user_id, scheduled_id)
            .await
    }

    async fn start_scheduled(&self, user_id: &str, scheduled_id: &str) -> Result<StartedWorkout> {
        let started = self
            .schedule_repository
            .start(user_id, scheduled_id, Utc::now())
            .await?;
        log::debug!(
            "user {} started scheduled workout {} as workout {}",
            user_id,
            scheduled_id,
            started.workout_id
        );
        Ok(started)
    }

    fn upcoming(&self, user_id: &str, now: DateTime<Utc>) -> Result<Vec<ScheduledWorkout>> {
        let today = now.date_naive();
        let tomorrow = (now + Duration::hours(24)).date_naive();
        let filters = ScheduleFilters {
            date_from: Some(today),
            date_to: Some(tomorrow),
            is_completed: Some(false),
        };
        self.schedule_repository.list_for_user(user_id, &filters)
    }
}
