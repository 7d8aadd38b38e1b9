use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::{Error, Result};
use crate::exercises::exercises_model::{Exercise, ExerciseUpdate, NewExercise};
use crate::exercises::exercises_traits::{ExerciseRepositoryTrait, ExerciseServiceTrait};

pub struct ExerciseService {
    exercise_repository: Arc<dyn ExerciseRepositoryTrait>,
}

impl ExerciseService {
    pub fn new(exercise_repository: Arc<dyn ExerciseRepositoryTrait>) -> Self {
        ExerciseService {
            exercise_repository,
        }
    }
}

#[async_trait]
impl ExerciseServiceTrait for ExerciseService {
    fn list_exercises(&self, user_id: &str) -> Result<Vec<Exercise>> {
        self.exercise_repository.list_visible(user_id)
    }

    fn get_exercise(&self, user_id: &str, exercise_id: &str) -> Result<Exercise> {
        self.exercise_repository
            .find_visible(user_id, exercise_id)?
            .ok_or_else(|| Error::not_found(format!("Exercise {}", exercise_id)))
    }

    async fn create_exercise(&self, user_id: &str, new_exercise: NewExercise) -> Result<Exercise> {
        // Server-authoritative: whatever the client sent, a created exercise
        // is custom and owned by the caller.
        let new_exercise = NewExercise {
            is_custom: true,
            owner_id: Some(user_id.to_string()),
            ..new_exercise
        };
        self.exercise_repository.insert(new_exercise).await
    }

    async fn update_exercise(
        &self,
        user_id: &str,
        exercise_id: &str,
        update: ExerciseUpdate,
    ) -> Result<Exercise> {
        self.exercise_repository
            .update(user_id, exercise_id, update)
            .await
    }

    async fn delete_exercise(&self, user_id: &str, exercise_id: &str) -> Result<()> {
        let deleted = self.exercise_repository.delete(user_id, exercise_id).await?;
        if deleted == 0 {
            return Err(Error::not_found(format!("Exercise {}", exercise_id)));
        }
        Ok(())
    }
}
