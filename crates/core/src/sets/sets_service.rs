use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::{Error, Result, ValidationError};
use crate::sets::sets_model::{NewWorkoutSet, WorkoutSet, WorkoutSetUpdate};
use crate::sets::sets_traits::{WorkoutSetRepositoryTrait, WorkoutSetServiceTrait};

pub struct WorkoutSetService {
    set_repository: Arc<dyn WorkoutSetRepositoryTrait>,
}

impl WorkoutSetService {
    pub fn new(set_repository: Arc<dyn WorkoutSetRepositoryTrait>) -> Self {
        WorkoutSetService { set_repository }
    }
}

/// Weight and reps must be non-negative; weight 0 is valid (bodyweight).
fn validate_measurements(weight: f64, reps: i32, rir: Option<i32>) -> Result<()> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "weight must be a non-negative number".to_string(),
        )));
    }
    if reps < 0 {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "reps must be a non-negative integer".to_string(),
        )));
    }
    if rir.is_some_and(|r| r < 0) {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "rir must be a non-negative integer".to_string(),
        )));
    }
    Ok(())
}

#[async_trait]
impl WorkoutSetServiceTrait for WorkoutSetService {
    fn list_sets(&self, user_id: &str) -> Result<Vec<WorkoutSet>> {
        self.set_repository.list_for_user(user_id)
    }

    fn get_set(&self, user_id: &str, set_id: &str) -> Result<WorkoutSet> {
        self.set_repository
            .find_for_user(user_id, set_id)?
            .ok_or_else(|| Error::not_found(format!("Set {}", set_id)))
    }

    async fn create_set(&self, user_id: &str, new_set: NewWorkoutSet) -> Result<WorkoutSet> {
        validate_measurements(new_set.weight, new_set.reps, new_set.rir)?;
        self.set_repository.insert(user_id, new_set).await
    }

    async fn update_set(
        &self,
        user_id: &str,
        set_id: &str,
        update: WorkoutSetUpdate,
    ) -> Result<WorkoutSet> {
        validate_measurements(update.weight, update.reps, update.rir)?;
        self.set_repository.update(user_id, set_id, update).await
    }

    async fn delete_set(&self, user_id: &str, set_id: &str) -> Result<()> {
        let deleted = self.set_repository.delete(user_id, set_id).await?;
        if deleted == 0 {
            return Err(Error::not_found(format!("Set {}", set_id)));
        }
        Ok(())
    }
}
