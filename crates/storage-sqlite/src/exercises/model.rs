//! Database models for exercises.

use std::str::FromStr;

use diesel::prelude::*;

use crate::errors::StorageError;
use trainlog_core::exercises::{Exercise, ExerciseUpdate, MuscleGroup, NewExercise};

/// Database model for exercises. The muscle group is stored as its wire
/// name; an unknown stored value surfaces as a storage error rather than
/// a panic.
#[derive(Queryable, Identifiable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::exercises)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ExerciseDB {
    pub id: String,
    pub name: String,
    pub muscle_group: String,
    pub description: Option<String>,
    pub is_custom: bool,
    pub owner_id: Option<String>,
}

/// Database model for creating a new exercise
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::exercises)]
pub struct NewExerciseDB {
    pub id: String,
    pub name: String,
    pub muscle_group: String,
    pub description: Option<String>,
    pub is_custom: bool,
    pub owner_id: Option<String>,
}

/// Changeset for updating an exercise; ownership fields are immutable.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::exercises)]
pub struct ExerciseUpdateDB {
    pub name: String,
    pub muscle_group: String,
    pub description: Option<String>,
}

impl TryFrom<ExerciseDB> for Exercise {
    type Error = StorageError;

    fn try_from(db: ExerciseDB) -> Result<Self, Self::Error> {
        let group = MuscleGroup::from_str(&db.muscle_group)
            .map_err(StorageError::SerializationError)?;
        Ok(Exercise {
            id: db.id,
            name: db.name,
            muscle_group: group,
            description: db.description,
            is_custom: db.is_custom,
            owner_id: db.owner_id,
        })
    }
}

impl NewExerciseDB {
    pub fn from_domain(domain: NewExercise, id: String) -> Self {
        NewExerciseDB {
            id,
            name: domain.name,
            muscle_group: domain.muscle_group.as_str().to_string(),
            description: domain.description,
            is_custom: domain.is_custom,
            owner_id: domain.owner_id,
        }
    }
}

impl From<ExerciseUpdate> for ExerciseUpdateDB {
    fn from(domain: ExerciseUpdate) -> Self {
        ExerciseUpdateDB {
            name: domain.name,
            muscle_group: domain.muscle_group.as_str().to_string(),
            description: domain.description,
        }
    }
}
