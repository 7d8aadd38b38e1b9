//! Database models for workout sets.

use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::errors::StorageError;
use trainlog_core::exercises::MuscleGroup;
use trainlog_core::sets::{NewWorkoutSet, SetWithExercise, WorkoutSet, WorkoutSetUpdate};

/// Database model for workout sets. The exercise name lives on the
/// exercises table; reads join it in.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::workout_sets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WorkoutSetDB {
    pub id: String,
    pub workout_id: String,
    pub exercise_id: String,
    pub weight: f64,
    pub reps: i32,
    pub rir: Option<i32>,
    pub created_at: NaiveDateTime,
}

/// Database model for creating a new workout set
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::workout_sets)]
pub struct NewWorkoutSetDB {
    pub id: String,
    pub workout_id: String,
    pub exercise_id: String,
    pub weight: f64,
    pub reps: i32,
    pub rir: Option<i32>,
    pub created_at: NaiveDateTime,
}

/// Changeset for updating a set.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::workout_sets)]
#[diesel(treat_none_as_null = true)]
pub struct WorkoutSetUpdateDB {
    pub exercise_id: String,
    pub weight: f64,
    pub reps: i32,
    pub rir: Option<i32>,
}

impl WorkoutSetDB {
    pub fn into_domain(self, exercise_name: String) -> WorkoutSet {
        WorkoutSet {
            id: self.id,
            workout_id: self.workout_id,
            exercise_id: self.exercise_id,
            exercise_name,
            weight: self.weight,
            reps: self.reps,
            rir: self.rir,
            created_at: DateTime::from_naive_utc_and_offset(self.created_at, Utc),
        }
    }

    pub fn into_joined(
        self,
        workout_start: NaiveDateTime,
        exercise_name: String,
        muscle_group: String,
    ) -> Result<SetWithExercise, StorageError> {
        let group =
            MuscleGroup::from_str(&muscle_group).map_err(StorageError::SerializationError)?;
        Ok(SetWithExercise {
            id: self.id,
            workout_id: self.workout_id,
            workout_start_time: DateTime::from_naive_utc_and_offset(workout_start, Utc),
            exercise_id: self.exercise_id,
            exercise_name,
            muscle_group: group,
            weight: self.weight,
            reps: self.reps,
            rir: self.rir,
            created_at: DateTime::from_naive_utc_and_offset(self.created_at, Utc),
        })
    }
}

impl NewWorkoutSetDB {
    pub fn from_domain(domain: NewWorkoutSet, id: String, created_at: DateTime<Utc>) -> Self {
        NewWorkoutSetDB {
            id,
            workout_id: domain.workout_id,
            exercise_id: domain.exercise_id,
            weight: domain.weight,
            reps: domain.reps,
            rir: domain.rir,
            created_at: created_at.naive_utc(),
        }
    }
}

impl From<WorkoutSetUpdate> for WorkoutSetUpdateDB {
    fn from(domain: WorkoutSetUpdate) -> Self {
        WorkoutSetUpdateDB {
            exercise_id: domain.exercise_id,
            weight: domain.weight,
            reps: domain.reps,
            rir: domain.rir,
        }
    }
}
