//! In-memory mock repositories shared by the service unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::errors::{Error, Result, ValidationError};
use crate::exercises::{Exercise, ExerciseRepositoryTrait, ExerciseUpdate, NewExercise};
use crate::schedule::{
    NewScheduledWorkout, ScheduleFilters, ScheduledWorkout, ScheduledWorkoutRepositoryTrait,
    ScheduledWorkoutUpdate, StartedWorkout,
};
use crate::sets::{
    NewWorkoutSet, SetWithExercise, WorkoutSet, WorkoutSetFilters, WorkoutSetRepositoryTrait,
    WorkoutSetUpdate,
};
use crate::workouts::{
    NewWorkout, Workout, WorkoutRepositoryTrait, WorkoutStatus, WorkoutUpdate,
};

// --- Mock ExerciseRepository ---

#[derive(Default)]
pub struct MockExerciseRepository {
    pub rows: Mutex<Vec<Exercise>>,
}

impl MockExerciseRepository {
    pub fn with(rows: Vec<Exercise>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }
}

#[async_trait]
impl ExerciseRepositoryTrait for MockExerciseRepository {
    fn list_visible(&self, user_id: &str) -> Result<Vec<Exercise>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.owner_id.is_none() || e.owner_id.as_deref() == Some(user_id))
            .cloned()
            .collect())
    }

    fn find_visible(&self, user_id: &str, exercise_id: &str) -> Result<Option<Exercise>> {
        Ok(self
            .list_visible(user_id)?
            .into_iter()
            .find(|e| e.id == exercise_id))
    }

    async fn insert(&self, new_exercise: NewExercise) -> Result<Exercise> {
        let exercise = Exercise {
            id: Uuid::new_v4().to_string(),
            name: new_exercise.name,
            muscle_group: new_exercise.muscle_group,
            description: new_exercise.description,
            is_custom: new_exercise.is_custom,
            owner_id: new_exercise.owner_id,
        };
        self.rows.lock().unwrap().push(exercise.clone());
        Ok(exercise)
    }

    async fn update(
        &self,
        user_id: &str,
        exercise_id: &str,
        update: ExerciseUpdate,
    ) -> Result<Exercise> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|e| {
                e.id == exercise_id
                    && (e.owner_id.is_none() || e.owner_id.as_deref() == Some(user_id))
            })
            .ok_or_else(|| Error::not_found(exercise_id.to_string()))?;
        row.name = update.name;
        row.muscle_group = update.muscle_group;
        row.description = update.description;
        Ok(row.clone())
    }

    async fn delete(&self, user_id: &str, exercise_id: &str) -> Result<usize> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|e| {
            !(e.id == exercise_id
                && (e.owner_id.is_none() || e.owner_id.as_deref() == Some(user_id)))
        });
        Ok(before - rows.len())
    }
}

// --- Mock WorkoutRepository ---

#[derive(Default)]
pub struct MockWorkoutRepository {
    pub rows: Mutex<Vec<Workout>>,
}

impl MockWorkoutRepository {
    pub fn with(rows: Vec<Workout>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }
}

#[async_trait]
impl WorkoutRepositoryTrait for MockWorkoutRepository {
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Workout>> {
        let mut workouts: Vec<Workout> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|w| w.owner_id == user_id)
            .cloned()
            .collect();
        workouts.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        Ok(workouts)
    }

    fn list_between(
        &self,
        user_id: &str,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<Vec<Workout>> {
        let mut workouts: Vec<Workout> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|w| {
                let date = w.start_time.date_naive();
                w.owner_id == user_id && date >= date_from && date <= date_to
            })
            .cloned()
            .collect();
        workouts.sort_by(|a, b| a.start_time.cmp(&b.start_time));
        Ok(workouts)
    }

    fn find_for_user(&self, user_id: &str, workout_id: &str) -> Result<Option<Workout>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|w| w.owner_id == user_id && w.id == workout_id)
            .cloned())
    }

    async fn insert(
        &self,
        user_id: &str,
        new_workout: NewWorkout,
        start_time: DateTime<Utc>,
    ) -> Result<Workout> {
        let workout = Workout {
            id: Uuid::new_v4().to_string(),
            owner_id: user_id.to_string(),
            start_time,
            end_time: None,
            status: WorkoutStatus::Started,
            note: new_workout.note,
        };
        self.rows.lock().unwrap().push(workout.clone());
        Ok(workout)
    }

    async fn update(
        &self,
        user_id: &str,
        workout_id: &str,
        update: WorkoutUpdate,
    ) -> Result<Workout> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|w| w.owner_id == user_id && w.id == workout_id)
            .ok_or_else(|| Error::not_found(workout_id.to_string()))?;
        row.note = update.note;
        Ok(row.clone())
    }

    async fn finish(
        &self,
        user_id: &str,
        workout_id: &str,
        end_time: DateTime<Utc>,
    ) -> Result<Workout> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|w| w.owner_id == user_id && w.id == workout_id)
            .ok_or_else(|| Error::not_found(workout_id.to_string()))?;
        row.status = WorkoutStatus::Finished;
        row.end_time = Some(end_time);
        Ok(row.clone())
    }

    async fn delete(&self, user_id: &str, workout_id: &str) -> Result<usize> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|w| !(w.owner_id == user_id && w.id == workout_id));
        Ok(before - rows.len())
    }
}

// --- Mock WorkoutSetRepository ---
//
// Rows carry the owning user alongside the joined shape so the mock can
// apply the same transitive scoping as the real repository.

#[derive(Default)]
pub struct MockWorkoutSetRepository {
    pub rows: Mutex<Vec<(String, SetWithExercise)>>,
}

impl MockWorkoutSetRepository {
    pub fn with(user_id: &str, rows: Vec<SetWithExercise>) -> Self {
        Self {
            rows: Mutex::new(rows.into_iter().map(|r| (user_id.to_string(), r)).collect()),
        }
    }
}

fn to_workout_set(row: &SetWithExercise) -> WorkoutSet {
    WorkoutSet {
        id: row.id.clone(),
        workout_id: row.workout_id.clone(),
        exercise_id: row.exercise_id.clone(),
        exercise_name: row.exercise_name.clone(),
        weight: row.weight,
        reps: row.reps,
        rir: row.rir,
        created_at: row.created_at,
    }
}

#[async_trait]
impl WorkoutSetRepositoryTrait for MockWorkoutSetRepository {
    fn list_for_user(&self, user_id: &str) -> Result<Vec<WorkoutSet>> {
        Ok(self
            .list_with_exercise(user_id, &WorkoutSetFilters::default())?
            .iter()
            .map(to_workout_set)
            .collect())
    }

    fn find_for_user(&self, user_id: &str, set_id: &str) -> Result<Option<WorkoutSet>> {
        Ok(self
            .list_for_user(user_id)?
            .into_iter()
            .find(|s| s.id == set_id))
    }

    fn list_with_exercise(
        &self,
        user_id: &str,
        filters: &WorkoutSetFilters,
    ) -> Result<Vec<SetWithExercise>> {
        let mut rows: Vec<SetWithExercise> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|(owner, _)| owner == user_id)
            .map(|(_, r)| r.clone())
            .filter(|r| {
                filters
                    .workout_id
                    .as_ref()
                    .is_none_or(|id| &r.workout_id == id)
                    && filters
                        .exercise_id
                        .as_ref()
                        .is_none_or(|id| &r.exercise_id == id)
                    && filters
                        .started_after
                        .is_none_or(|t| r.workout_start_time.naive_utc() >= t)
                    && filters
                        .started_before
                        .is_none_or(|t| r.workout_start_time.naive_utc() < t)
            })
            .collect();
        rows.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(rows)
    }

    async fn insert(&self, user_id: &str, new_set: NewWorkoutSet) -> Result<WorkoutSet> {
        let row = SetWithExercise {
            id: Uuid::new_v4().to_string(),
            workout_id: new_set.workout_id,
            workout_start_time: Utc::now(),
            exercise_id: new_set.exercise_id,
            exercise_name: String::new(),
            muscle_group: crate::exercises::MuscleGroup::Core,
            weight: new_set.weight,
            reps: new_set.reps,
            rir: new_set.rir,
            created_at: Utc::now(),
        };
        let set = to_workout_set(&row);
        self.rows.lock().unwrap().push((user_id.to_string(), row));
        Ok(set)
    }

    async fn update(
        &self,
        user_id: &str,
        set_id: &str,
        update: WorkoutSetUpdate,
    ) -> Result<WorkoutSet> {
        let mut rows = self.rows.lock().unwrap();
        let (_, row) = rows
            .iter_mut()
            .find(|(owner, r)| owner == user_id && r.id == set_id)
            .ok_or_else(|| Error::not_found(set_id.to_string()))?;
        row.exercise_id = update.exercise_id;
        row.weight = update.weight;
        row.reps = update.reps;
        row.rir = update.rir;
        Ok(to_workout_set(row))
    }

    async fn delete(&self, user_id: &str, set_id: &str) -> Result<usize> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|(owner, r)| !(owner == user_id && r.id == set_id));
        Ok(before - rows.len())
    }
}

// --- Mock ScheduledWorkoutRepository ---

#[derive(Default)]
pub struct MockScheduleRepository {
    pub rows: Mutex<Vec<(String, ScheduledWorkout)>>,
}

impl MockScheduleRepository {
    pub fn with(user_id: &str, rows: Vec<ScheduledWorkout>) -> Self {
        Self {
            rows: Mutex::new(rows.into_iter().map(|r| (user_id.to_string(), r)).collect()),
        }
    }
}

#[async_trait]
impl ScheduledWorkoutRepositoryTrait for MockScheduleRepository {
    fn list_for_user(
        &self,
        user_id: &str,
        filters: &ScheduleFilters,
    ) -> Result<Vec<ScheduledWorkout>> {
        let mut rows: Vec<ScheduledWorkout> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|(owner, _)| owner == user_id)
            .map(|(_, r)| r.clone())
            .filter(|r| {
                filters.date_from.is_none_or(|d| r.date >= d)
                    && filters.date_to.is_none_or(|d| r.date <= d)
                    && filters.is_completed.is_none_or(|c| r.is_completed == c)
            })
            .collect();
        rows.sort_by(|a, b| (a.date, a.time).cmp(&(b.date, b.time)));
        Ok(rows)
    }

    fn find_for_user(&self, user_id: &str, scheduled_id: &str) -> Result<Option<ScheduledWorkout>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|(owner, r)| owner == user_id && r.id == scheduled_id)
            .map(|(_, r)| r.clone()))
    }

    async fn insert(&self, user_id: &str, new: NewScheduledWorkout) -> Result<ScheduledWorkout> {
        let scheduled = ScheduledWorkout {
            id: Uuid::new_v4().to_string(),
            date: new.date,
            time: new.time,
            title: new.title,
            exercises: Vec::new(),
            note: new.note,
            is_completed: false,
            workout_id: None,
            notify_before_minutes: new.notify_before_minutes,
        };
        self.rows
            .lock()
            .unwrap()
            .push((user_id.to_string(), scheduled.clone()));
        Ok(scheduled)
    }

    async fn update(
        &self,
        user_id: &str,
        scheduled_id: &str,
        update: ScheduledWorkoutUpdate,
    ) -> Result<ScheduledWorkout> {
        let mut rows = self.rows.lock().unwrap();
        let (_, row) = rows
            .iter_mut()
            .find(|(owner, r)| owner == user_id && r.id == scheduled_id)
            .ok_or_else(|| Error::not_found(scheduled_id.to_string()))?;
        row.date = update.date;
        row.time = update.time;
        row.title = update.title;
        row.note = update.note;
        row.notify_before_minutes = update.notify_before_minutes;
        Ok(row.clone())
    }

    async fn delete(&self, user_id: &str, scheduled_id: &str) -> Result<usize> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|(owner, r)| !(owner == user_id && r.id == scheduled_id));
        Ok(before - rows.len())
    }

    async fn complete(&self, user_id: &str, scheduled_id: &str) -> Result<ScheduledWorkout> {
        let mut rows = self.rows.lock().unwrap();
        let (_, row) = rows
            .iter_mut()
            .find(|(owner, r)| owner == user_id && r.id == scheduled_id)
            .ok_or_else(|| Error::not_found(scheduled_id.to_string()))?;
        row.is_completed = true;
        Ok(row.clone())
    }

    async fn start(
        &self,
        user_id: &str,
        scheduled_id: &str,
        _now: DateTime<Utc>,
    ) -> Result<StartedWorkout> {
        let mut rows = self.rows.lock().unwrap();
        let (_, row) = rows
            .iter_mut()
            .find(|(owner, r)| owner == user_id && r.id == scheduled_id)
            .ok_or_else(|| Error::not_found(scheduled_id.to_string()))?;
        if row.workout_id.is_some() {
            return Err(Error::Validation(ValidationError::AlreadyStarted));
        }
        let workout_id = Uuid::new_v4().to_string();
        row.workout_id = Some(workout_id.clone());
        Ok(StartedWorkout {
            scheduled: row.clone(),
            workout_id,
        })
    }
}
