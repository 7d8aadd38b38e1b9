use crate::errors::Result;
use crate::sets::sets_model::{
    NewWorkoutSet, SetWithExercise, WorkoutSet, WorkoutSetFilters, WorkoutSetUpdate,
};
use async_trait::async_trait;

/// Trait for workout set repository operations. Scoping is transitive:
/// a set is visible iff its parent workout belongs to the user.
#[async_trait]
pub trait WorkoutSetRepositoryTrait: Send + Sync {
    /// All sets of the user's workouts, ordered by creation time.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<WorkoutSet>>;
    fn find_for_user(&self, user_id: &str, set_id: &str) -> Result<Option<WorkoutSet>>;
    /// Joined rows for aggregation, ordered by creation time.
    fn list_with_exercise(
        &self,
        user_id: &str,
        filters: &WorkoutSetFilters,
    ) -> Result<Vec<SetWithExercise>>;
    /// Inserts a set; the parent workout must belong to the user.
    async fn insert(&self, user_id: &str, new_set: NewWorkoutSet) -> Result<WorkoutSet>;
    async fn update(
        &self,
        user_id: &str,
        set_id: &str,
        update: WorkoutSetUpdate,
    ) -> Result<WorkoutSet>;
    async fn delete(&self, user_id: &str, set_id: &str) -> Result<usize>;
}

/// Trait for workout set service operations.
#[async_trait]
pub trait WorkoutSetServiceTrait: Send + Sync {
    fn list_sets(&self, user_id: &str) -> Result<Vec<WorkoutSet>>;
    fn get_set(&self, user_id: &str, set_id: &str) -> Result<WorkoutSet>;
    async fn create_set(&self, user_id: &str, new_set: NewWorkoutSet) -> Result<WorkoutSet>;
    async fn update_set(
        &self,
        user_id: &str,
        set_id: &str,
        update: WorkoutSetUpdate,
    ) -> Result<WorkoutSet>;
    async fn delete_set(&self, user_id: &str, set_id: &str) -> Result<()>;
}
