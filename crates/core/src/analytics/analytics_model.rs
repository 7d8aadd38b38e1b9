//! Analytics output shapes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::exercises::MuscleGroup;
use crate::schedule::ScheduledWorkout;
use crate::workouts::WorkoutSummary;

/// One point of the tonnage-over-time chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VolumePoint {
    pub date: NaiveDate,
    /// Σ weight×reps for the day, rounded to one decimal.
    pub volume: f64,
}

/// One point of the max-weight progression chart for a single exercise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MaxWeightPoint {
    pub date: NaiveDate,
    pub max_weight: f64,
}

/// All-time personal record for one exercise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalRecord {
    pub exercise_id: String,
    pub exercise_name: String,
    pub muscle_group: MuscleGroup,
    pub max_weight: f64,
}

/// One day of the calendar range. Days without activity still appear,
/// with empty lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub has_workout: bool,
    pub has_scheduled: bool,
    pub completed_workouts: Vec<WorkoutSummary>,
    pub scheduled: Vec<ScheduledWorkout>,
}
