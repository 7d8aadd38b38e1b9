//! Scheduled workout domain models.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::exercises::Exercise;

/// Domain model representing a planned session. Reads expand the linked
/// exercises to full objects; writes accept ids (see the input models).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledWorkout {
    pub id: String,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub title: String,
    pub exercises: Vec<Exercise>,
    pub note: Option<String>,
    pub is_completed: bool,
    /// Set once by the start action; never cleared except by deleting the
    /// linked workout.
    pub workout_id: Option<String>,
    pub notify_before_minutes: i32,
}

fn default_notify_before() -> i32 {
    30
}

/// Input model for creating a scheduled workout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewScheduledWorkout {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub title: String,
    #[serde(default)]
    pub exercise_ids: Vec<String>,
    pub note: Option<String>,
    #[serde(default = "default_notify_before")]
    pub notify_before_minutes: i32,
}

/// Input model for updating a scheduled workout. `exercise_ids`, when
/// present, replaces the linked set wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledWorkoutUpdate {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub title: String,
    pub exercise_ids: Option<Vec<String>>,
    pub note: Option<String>,
    #[serde(default = "default_notify_before")]
    pub notify_before_minutes: i32,
}

/// Result of the start action: the updated schedule entry plus the id of
/// the freshly created workout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StartedWorkout {
    pub scheduled: ScheduledWorkout,
    pub workout_id: String,
}

/// Enumerated optional filters for schedule queries (AND-combined).
#[derive(Debug, Clone, Default)]
pub struct ScheduleFilters {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub is_completed: Option<bool>,
}
