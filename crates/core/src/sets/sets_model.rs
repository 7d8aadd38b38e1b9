//! Workout set domain models.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::exercises::MuscleGroup;

/// Domain model representing one logged set. Carries the denormalized
/// exercise name for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSet {
    pub id: String,
    pub workout_id: String,
    pub exercise_id: String,
    pub exercise_name: String,
    pub weight: f64,
    pub reps: i32,
    pub rir: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkoutSet {
    pub workout_id: String,
    pub exercise_id: String,
    pub weight: f64,
    pub reps: i32,
    pub rir: Option<i32>,
}

/// Input model for updating a set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSetUpdate {
    pub exercise_id: String,
    pub weight: f64,
    pub reps: i32,
    pub rir: Option<i32>,
}

/// A set joined with its exercise and the parent workout's start time.
/// This is the single row shape feeding detail grouping, summaries, the
/// calendar, and all analytics aggregations.
#[derive(Debug, Clone, PartialEq)]
pub struct SetWithExercise {
    pub id: String,
    pub workout_id: String,
    pub workout_start_time: DateTime<Utc>,
    pub exercise_id: String,
    pub exercise_name: String,
    pub muscle_group: MuscleGroup,
    pub weight: f64,
    pub reps: i32,
    pub rir: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Enumerated optional filters for set queries. All filters combine with
/// AND; an empty struct selects every set of the user.
#[derive(Debug, Clone, Default)]
pub struct WorkoutSetFilters {
    pub workout_id: Option<String>,
    pub exercise_id: Option<String>,
    /// Parent workout started at or after this instant.
    pub started_after: Option<NaiveDateTime>,
    /// Parent workout started strictly before this instant.
    pub started_before: Option<NaiveDateTime>,
}
