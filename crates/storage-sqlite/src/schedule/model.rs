//! Database models for scheduled workouts.

use chrono::{NaiveDate, NaiveTime};
use diesel::prelude::*;

use trainlog_core::exercises::Exercise;
use trainlog_core::schedule::{NewScheduledWorkout, ScheduledWorkout, ScheduledWorkoutUpdate};

/// Database model for scheduled workouts. The linked exercises live in a
/// join table and are expanded separately.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::scheduled_workouts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ScheduledWorkoutDB {
    pub id: String,
    pub owner_id: String,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub title: String,
    pub note: Option<String>,
    pub is_completed: bool,
    pub workout_id: Option<String>,
    pub notify_before_minutes: i32,
}

/// Database model for creating a new scheduled workout
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::scheduled_workouts)]
pub struct NewScheduledWorkoutDB {
    pub id: String,
    pub owner_id: String,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub title: String,
    pub note: Option<String>,
    pub is_completed: bool,
    pub workout_id: Option<String>,
    pub notify_before_minutes: i32,
}

/// Changeset for updating a scheduled workout; completion and the workout
/// link change only through their dedicated actions.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::scheduled_workouts)]
#[diesel(treat_none_as_null = true)]
pub struct ScheduledWorkoutUpdateDB {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub title: String,
    pub note: Option<String>,
    pub notify_before_minutes: i32,
}

/// Database model for the schedule-to-exercise join table
#[derive(Insertable, Queryable, Debug, Clone)]
#[diesel(table_name = crate::schema::scheduled_workout_exercises)]
pub struct ScheduledWorkoutExerciseDB {
    pub scheduled_workout_id: String,
    pub exercise_id: String,
}

impl ScheduledWorkoutDB {
    pub fn into_domain(self, linked_exercises: Vec<Exercise>) -> ScheduledWorkout {
        ScheduledWorkout {
            id: self.id,
            date: self.date,
            time: self.time,
            title: self.title,
            exercises: linked_exercises,
            note: self.note,
            is_completed: self.is_completed,
            workout_id: self.workout_id,
            notify_before_minutes: self.notify_before_minutes,
        }
    }
}

impl NewScheduledWorkoutDB {
    pub fn from_domain(domain: &NewScheduledWorkout, id: String, user_id: String) -> Self {
        NewScheduledWorkoutDB {
            id,
            owner_id: user_id,
            date: domain.date,
            time: domain.time,
            title: domain.title.clone(),
            note: domain.note.clone(),
            is_completed: false,
            workout_id: None,
            notify_before_minutes: domain.notify_before_minutes,
        }
    }
}

impl From<&ScheduledWorkoutUpdate> for ScheduledWorkoutUpdateDB {
    fn from(domain: &ScheduledWorkoutUpdate) -> Self {
        ScheduledWorkoutUpdateDB {
            date: domain.date,
            time: domain.time,
            title: domain.title.clone(),
            note: domain.note.clone(),
            notify_before_minutes: domain.notify_before_minutes,
        }
    }
}
