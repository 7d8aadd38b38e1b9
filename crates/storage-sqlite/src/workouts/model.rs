//! Database models for workouts.

use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::errors::StorageError;
use trainlog_core::workouts::{NewWorkout, Workout, WorkoutStatus, WorkoutUpdate};

/// Database model for workouts
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::workouts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WorkoutDB {
    pub id: String,
    pub owner_id: String,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub status: String,
    pub note: Option<String>,
}

/// Database model for creating a new workout
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::workouts)]
pub struct NewWorkoutDB {
    pub id: String,
    pub owner_id: String,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub status: String,
    pub note: Option<String>,
}

/// Changeset for the note-only update.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::workouts)]
#[diesel(treat_none_as_null = true)]
pub struct WorkoutUpdateDB {
    pub note: Option<String>,
}

impl TryFrom<WorkoutDB> for Workout {
    type Error = StorageError;

    fn try_from(db: WorkoutDB) -> Result<Self, Self::Error> {
        let parsed_status =
            WorkoutStatus::from_str(&db.status).map_err(StorageError::SerializationError)?;
        Ok(Workout {
            id: db.id,
            owner_id: db.owner_id,
            start_time: DateTime::from_naive_utc_and_offset(db.start_time, Utc),
            end_time: db
                .end_time
                .map(|t| DateTime::from_naive_utc_and_offset(t, Utc)),
            status: parsed_status,
            note: db.note,
        })
    }
}

impl NewWorkoutDB {
    pub fn from_domain(
        domain: NewWorkout,
        id: String,
        user_id: String,
        start_time: DateTime<Utc>,
    ) -> Self {
        NewWorkoutDB {
            id,
            owner_id: user_id,
            start_time: start_time.naive_utc(),
            end_time: None,
            status: WorkoutStatus::Started.as_str().to_string(),
            note: domain.note,
        }
    }
}

impl From<WorkoutUpdate> for WorkoutUpdateDB {
    fn from(domain: WorkoutUpdate) -> Self {
        WorkoutUpdateDB { note: domain.note }
    }
}
