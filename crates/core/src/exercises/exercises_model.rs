//! Exercise domain models.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Muscle group targeted by an exercise. Stored as its SCREAMING_SNAKE_CASE
/// wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Forearms,
    Quads,
    Hamstrings,
    Glutes,
    Calves,
    Core,
    Traps,
    Cardio,
}

impl MuscleGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "CHEST",
            MuscleGroup::Back => "BACK",
            MuscleGroup::Shoulders => "SHOULDERS",
            MuscleGroup::Biceps => "BICEPS",
            MuscleGroup::Triceps => "TRICEPS",
            MuscleGroup::Forearms => "FOREARMS",
            MuscleGroup::Quads => "QUADS",
            MuscleGroup::Hamstrings => "HAMSTRINGS",
            MuscleGroup::Glutes => "GLUTES",
            MuscleGroup::Calves => "CALVES",
            MuscleGroup::Core => "CORE",
            MuscleGroup::Traps => "TRAPS",
            MuscleGroup::Cardio => "CARDIO",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MuscleGroup {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "CHEST" => Ok(MuscleGroup::Chest),
            "BACK" => Ok(MuscleGroup::Back),
            "SHOULDERS" => Ok(MuscleGroup::Shoulders),
            "BICEPS" => Ok(MuscleGroup::Biceps),
            "TRICEPS" => Ok(MuscleGroup::Triceps),
            "FOREARMS" => Ok(MuscleGroup::Forearms),
            "QUADS" => Ok(MuscleGroup::Quads),
            "HAMSTRINGS" => Ok(MuscleGroup::Hamstrings),
            "GLUTES" => Ok(MuscleGroup::Glutes),
            "CALVES" => Ok(MuscleGroup::Calves),
            "CORE" => Ok(MuscleGroup::Core),
            "TRAPS" => Ok(MuscleGroup::Traps),
            "CARDIO" => Ok(MuscleGroup::Cardio),
            _ => Err(format!("Unknown muscle group: {}", s)),
        }
    }
}

/// Domain model representing an exercise.
///
/// Rows with `owner_id == None` are the shared catalog visible to everyone;
/// owned rows are visible only to their owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub muscle_group: MuscleGroup,
    pub description: Option<String>,
    pub is_custom: bool,
    pub owner_id: Option<String>,
}

/// Input model for creating an exercise.
///
/// `is_custom` and `owner_id` are accepted on the wire but overwritten by
/// the service: a created exercise is always custom and owned by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExercise {
    pub name: String,
    pub muscle_group: MuscleGroup,
    pub description: Option<String>,
    #[serde(default)]
    pub is_custom: bool,
    #[serde(default)]
    pub owner_id: Option<String>,
}

/// Input model for updating an exercise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseUpdate {
    pub name: String,
    pub muscle_group: MuscleGroup,
    pub description: Option<String>,
}
