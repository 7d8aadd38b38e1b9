use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::errors::{Error, Result};
use crate::sets::{SetWithExercise, WorkoutSetFilters, WorkoutSetRepositoryTrait};
use crate::workouts::workouts_model::{
    detail_workout, summarize_workout, NewWorkout, Workout, WorkoutDetail, WorkoutSummary,
    WorkoutUpdate,
};
use crate::workouts::workouts_traits::{WorkoutRepositoryTrait, WorkoutServiceTrait};

pub struct WorkoutService {
    workout_repository: Arc<dyn WorkoutRepositoryTrait>,
    set_repository: Arc<dyn WorkoutSetRepositoryTrait>,
}

impl WorkoutService {
    pub fn new(
        workout_repository: Arc<dyn WorkoutRepositoryTrait>,
        set_repository: Arc<dyn WorkoutSetRepositoryTrait>,
    ) -> Self {
        WorkoutService {
            workout_repository,
            set_repository,
        }
    }

    fn sets_for_workout(&self, user_id: &str, workout_id: &str) -> Result<Vec<SetWithExercise>> {
        let filters = WorkoutSetFilters {
            workout_id: Some(workout_id.to_string()),
            ..Default::default()
        };
        self.set_repository.list_with_exercise(user_id, &filters)
    }

    fn detail(&self, user_id: &str, workout: &Workout) -> Result<WorkoutDetail> {
        let sets = self.sets_for_workout(user_id, &workout.id)?;
        Ok(detail_workout(workout, &sets))
    }
}

#[async_trait]
impl WorkoutServiceTrait for WorkoutService {
    fn list_workouts(&self, user_id: &str) -> Result<Vec<WorkoutSummary>> {
        let workouts = self.workout_repository.list_for_user(user_id)?;
        // One joined query for all sets, bucketed by workout.
        let sets = self
            .set_repository
            .list_with_exercise(user_id, &WorkoutSetFilters::default())?;
        let mut by_workout: HashMap<&str, Vec<SetWithExercise>> = HashMap::new();
        for s in &sets {
            by_workout
                .entry(s.workout_id.as_str())
                .or_default()
                .push(s.clone());
        }
        let empty = Vec::new();
        Ok(workouts
            .iter()
            .map(|w| summarize_workout(w, by_workout.get(w.id.as_str()).unwrap_or(&empty)))
            .collect())
    }

    fn get_workout(&self, user_id: &str, workout_id: &str) -> Result<WorkoutDetail> {
        let workout = self
            .workout_repository
            .find_for_user(user_id, workout_id)?
            .ok_or_else(|| Error::not_found(format!("Workout {}", workout_id)))?;
        self.detail(user_id, &workout)
    }

    async fn create_workout(
        &self,
        user_id: &str,
        new_workout: NewWorkout,
    ) -> Result<WorkoutSummary> {
        let workout = self
            .workout_repository
            .insert(user_id, new_workout, Utc::now())
            .await?;
        log::debug!("user {} started workout {}", user_id, workout.id);
        Ok(summarize_workout(&workout, &[]))
    }

    async fn update_workout(
        &self,
        user_id: &str,
        workout_id: &str,
        update: WorkoutUpdate,
    ) -> Result<WorkoutSummary> {
        let workout = self
            .workout_repository
            .update(user_id, workout_id, update)
            .await?;
        let sets = self.sets_for_workout(user_id, workout_id)?;
        Ok(summarize_workout(&workout, &sets))
    }

    async fn finish_workout(&self, user_id: &str, workout_id: &str) -> Result<WorkoutDetail> {
        // Re-finishing is allowed and overwrites the end time; the status
        // stays FINISHED either way.
        let workout = self
            .workout_repository
            .finish(user_id, workout_id, Utc::now())
            .await?;
        self.detail(user_id, &workout)
    }

    async fn delete_workout(&self, user_id: &str, workout_id: &str) -> Result<()> {
        let deleted = self.workout_repository.delete(user_id, workout_id).await?;
        if deleted == 0 {
            return Err(Error::not_found(format!("Workout {}", workout_id)));
        }
        Ok(())
    }
}
