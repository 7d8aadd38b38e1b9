//! Workout domain models and the summary/detail output shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::exercises::MuscleGroup;
use crate::sets::SetWithExercise;

/// Lifecycle state of a workout. STARTED at creation, FINISHED exactly once
/// via the finish action; the state never reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkoutStatus {
    Started,
    Finished,
}

impl WorkoutStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutStatus::Started => "STARTED",
            WorkoutStatus::Finished => "FINISHED",
        }
    }
}

impl fmt::Display for WorkoutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "STARTED" => Ok(WorkoutStatus::Started),
            "FINISHED" => Ok(WorkoutStatus::Finished),
            _ => Err(format!("Unknown workout status: {}", s)),
        }
    }
}

/// Domain model representing a workout session.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: String,
    pub owner_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub status: WorkoutStatus,
    pub note: Option<String>,
}

/// Input model for creating a workout. Owner, start time and status are
/// set by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkout {
    pub note: Option<String>,
}

/// Input model for updating a workout. Only the note is mutable; the start
/// time is immutable and status/end_time change through the finish action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutUpdate {
    pub note: Option<String>,
}

/// Summary shape used by the list endpoint and the calendar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSummary {
    pub id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub status: WorkoutStatus,
    pub note: Option<String>,
    pub total_sets: usize,
    pub total_volume: f64,
}

/// One set inside an exercise group (the exercise lives on the parent).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetInGroup {
    pub id: String,
    pub weight: f64,
    pub reps: i32,
    pub rir: Option<i32>,
}

/// Sets of one exercise within a workout, in creation order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseGroup {
    pub exercise_id: String,
    pub exercise_name: String,
    pub muscle_group: MuscleGroup,
    pub sets: Vec<SetInGroup>,
}

/// Detail shape used by the retrieve and finish endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDetail {
    pub id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub status: WorkoutStatus,
    pub note: Option<String>,
    pub duration_minutes: Option<i64>,
    pub total_volume: f64,
    pub exercises: Vec<ExerciseGroup>,
}

/// Total tonnage of a slice of sets.
pub(crate) fn total_volume(sets: &[SetWithExercise]) -> f64 {
    sets.iter().map(|s| s.weight * s.reps as f64).sum()
}

/// Builds the list/calendar summary for a workout from its joined sets.
pub fn summarize_workout(workout: &Workout, sets: &[SetWithExercise]) -> WorkoutSummary {
    WorkoutSummary {
        id: workout.id.clone(),
        start_time: workout.start_time,
        end_time: workout.end_time,
        status: workout.status,
        note: workout.note.clone(),
        total_sets: sets.len(),
        total_volume: total_volume(sets),
    }
}

/// Builds the detail shape: sets grouped by exercise in order of first
/// appearance, where the underlying sets are ordered by creation time.
pub(crate) fn detail_workout(workout: &Workout, sets: &[SetWithExercise]) -> WorkoutDetail {
    let mut groups: Vec<ExerciseGroup> = Vec::new();
    for s in sets {
        let idx = match groups.iter().position(|g| g.exercise_id == s.exercise_id) {
            Some(i) => i,
            None => {
                groups.push(ExerciseGroup {
                    exercise_id: s.exercise_id.clone(),
                    exercise_name: s.exercise_name.clone(),
                    muscle_group: s.muscle_group,
                    sets: Vec::new(),
                });
                groups.len() - 1
            }
        };
        groups[idx].sets.push(SetInGroup {
            id: s.id.clone(),
            weight: s.weight,
            reps: s.reps,
            rir: s.rir,
        });
    }

    let duration_minutes = workout.end_time.map(|end| {
        let seconds = (end - workout.start_time).num_seconds() as f64;
        (seconds / 60.0).round() as i64
    });

    WorkoutDetail {
        id: workout.id.clone(),
        start_time: workout.start_time,
        end_time: workout.end_time,
        status: workout.status,
        note: workout.note.clone(),
        duration_minutes,
        total_volume: total_volume(sets),
        exercises: groups,
    }
}
