use crate::errors::Result;
use crate::exercises::exercises_model::{Exercise, ExerciseUpdate, NewExercise};
use async_trait::async_trait;

/// Trait for exercise repository operations.
///
/// "Visible" always means: global rows (no owner) plus rows owned by
/// `user_id`. Updates and deletes are restricted to that same set, so a
/// foreign custom exercise behaves exactly like a missing one.
#[async_trait]
pub trait ExerciseRepositoryTrait: Send + Sync {
    fn list_visible(&self, user_id: &str) -> Result<Vec<Exercise>>;
    fn find_visible(&self, user_id: &str, exercise_id: &str) -> Result<Option<Exercise>>;
    async fn insert(&self, new_exercise: NewExercise) -> Result<Exercise>;
    async fn update(
        &self,
        user_id: &str,
        exercise_id: &str,
        update: ExerciseUpdate,
    ) -> Result<Exercise>;
    async fn delete(&self, user_id: &str, exercise_id: &str) -> Result<usize>;
}

/// Trait for exercise service operations.
#[async_trait]
pub trait ExerciseServiceTrait: Send + Sync {
    fn list_exercises(&self, user_id: &str) -> Result<Vec<Exercise>>;
    fn get_exercise(&self, user_id: &str, exercise_id: &str) -> Result<Exercise>;
    async fn create_exercise(&self, user_id: &str, new_exercise: NewExercise) -> Result<Exercise>;
    async fn update_exercise(
        &self,
        user_id: &str,
        exercise_id: &str,
        update: ExerciseUpdate,
    ) -> Result<Exercise>;
    async fn delete_exercise(&self, user_id: &str, exercise_id: &str) -> Result<()>;
}
