use std::collections::HashMap;

use chrono::{DateTime, Utc};
use trainlog_core::errors::ValidationError;
use trainlog_core::exercises::Exercise;
use trainlog_core::schedule::{
    NewScheduledWorkout, ScheduleFilters, ScheduledWorkout, ScheduledWorkoutRepositoryTrait,
    ScheduledWorkoutUpdate, StartedWorkout,
};
use trainlog_core::workouts::WorkoutStatus;
use trainlog_core::{Error, Result};

use super::model::{
    NewScheduledWorkoutDB, ScheduledWorkoutDB, ScheduledWorkoutExerciseDB,
    ScheduledWorkoutUpdateDB,
};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::exercises::ExerciseDB;
use crate::schema::{exercises, scheduled_workout_exercises, scheduled_workouts, workouts};
use crate::workouts::NewWorkoutDB;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use uuid::Uuid;

pub struct ScheduleRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl ScheduleRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        ScheduleRepository { pool, writer }
    }
}

/// Loads the linked exercises for one schedule entry, ordered by name.
fn load_exercises(conn: &mut SqliteConnection, scheduled_id: &str) -> Result<Vec<Exercise>> {
    let rows = scheduled_workout_exercises::table
        .inner_join(exercises::table)
        .filter(scheduled_workout_exercises::scheduled_workout_id.eq(scheduled_id))
        .order(exercises::name.asc())
        .select(ExerciseDB::as_select())
        .load::<ExerciseDB>(conn)
        .into_core()?;
    rows.into_iter()
        .map(|row| Exercise::try_from(row).map_err(Error::from))
        .collect()
}

/// Replaces the join rows for one schedule entry wholesale.
fn replace_exercises(
    conn: &mut SqliteConnection,
    scheduled_id: &str,
    exercise_ids: &[String],
) -> Result<()> {
    diesel::delete(
        scheduled_workout_exercises::table
            .filter(scheduled_workout_exercises::scheduled_workout_id.eq(scheduled_id)),
    )
    .execute(conn)
    .into_core()?;

    let rows: Vec<ScheduledWorkoutExerciseDB> = exercise_ids
        .iter()
        .map(|eid| ScheduledWorkoutExerciseDB {
            scheduled_workout_id: scheduled_id.to_string(),
            exercise_id: eid.clone(),
        })
        .collect();
    diesel::insert_into(scheduled_workout_exercises::table)
        .values(&rows)
        .execute(conn)
        .into_core()?;
    Ok(())
}

fn find_row(
    conn: &mut SqliteConnection,
    user: &str,
    scheduled_id: &str,
) -> Result<Option<ScheduledWorkoutDB>> {
    scheduled_workouts::table
        .find(scheduled_id)
        .filter(scheduled_workouts::owner_id.eq(user))
        .first::<ScheduledWorkoutDB>(conn)
        .optional()
        .into_core()
}

fn expand(conn: &mut SqliteConnection, row: ScheduledWorkoutDB) -> Result<ScheduledWorkout> {
    let linked = load_exercises(conn, &row.id)?;
    Ok(row.into_domain(linked))
}

#[async_trait]
impl ScheduledWorkoutRepositoryTrait for ScheduleRepository {
    fn list_for_user(
        &self,
        user_id: &str,
        filters: &ScheduleFilters,
    ) -> Result<Vec<ScheduledWorkout>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = scheduled_workouts::table
            .filter(scheduled_workouts::owner_id.eq(user_id))
            .into_boxed();
        if let Some(from) = filters.date_from {
            query = query.filter(scheduled_workouts::date.ge(from));
        }
        if let Some(to) = filters.date_to {
            query = query.filter(scheduled_workouts::date.le(to));
        }
        if let Some(completed) = filters.is_completed {
            query = query.filter(scheduled_workouts::is_completed.eq(completed));
        }

        let rows = query
            .order((
                scheduled_workouts::date.asc(),
                scheduled_workouts::time.asc(),
            ))
            .load::<ScheduledWorkoutDB>(&mut conn)
            .into_core()?;

        // One query for all join rows, bucketed by schedule entry.
        let ids: Vec<String> = rows.iter().map(|r| r.id.clone()).collect();
        let linked = scheduled_workout_exercises::table
            .inner_join(exercises::table)
            .filter(scheduled_workout_exercises::scheduled_workout_id.eq_any(&ids))
            .order(exercises::name.asc())
            .select((
                scheduled_workout_exercises::scheduled_workout_id,
                ExerciseDB::as_select(),
            ))
            .load::<(String, ExerciseDB)>(&mut conn)
            .into_core()?;

        let mut by_entry: HashMap<String, Vec<Exercise>> = HashMap::new();
        for (entry_id, exercise_db) in linked {
            by_entry
                .entry(entry_id)
                .or_default()
                .push(Exercise::try_from(exercise_db)?);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let linked = by_entry.remove(&row.id).unwrap_or_default();
                row.into_domain(linked)
            })
            .collect())
    }

    fn find_for_user(&self, user_id: &str, scheduled_id: &str) -> Result<Option<ScheduledWorkout>> {
        let mut conn = get_connection(&self.pool)?;
        match find_row(&mut conn, user_id, scheduled_id)? {
            Some(row) => Ok(Some(expand(&mut conn, row)?)),
            None => Ok(None),
        }
    }

    async fn insert(&self, user_id: &str, new: NewScheduledWorkout) -> Result<ScheduledWorkout> {
        let user = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<ScheduledWorkout> {
                let new_db =
                    NewScheduledWorkoutDB::from_domain(&new, Uuid::new_v4().to_string(), user);

                let row = diesel::insert_into(scheduled_workouts::table)
                    .values(&new_db)
                    .returning(ScheduledWorkoutDB::as_returning())
                    .get_result::<ScheduledWorkoutDB>(conn)
                    .into_core()?;
                replace_exercises(conn, &row.id, &new.exercise_ids)?;
                expand(conn, row)
            })
            .await
    }

    async fn update(
        &self,
        user_id: &str,
        scheduled_id: &str,
        update: ScheduledWorkoutUpdate,
    ) -> Result<ScheduledWorkout> {
        let user = user_id.to_string();
        let target = scheduled_id.to_string();
        let update_db = ScheduledWorkoutUpdateDB::from(&update);

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<ScheduledWorkout> {
                let affected = diesel::update(
                    scheduled_workouts::table
                        .find(&target)
                        .filter(scheduled_workouts::owner_id.eq(&user)),
                )
                .set(&update_db)
                .execute(conn)
                .into_core()?;
                if affected == 0 {
                    return Err(Error::not_found(format!("Scheduled workout {}", target)));
                }
                if let Some(ref ids) = update.exercise_ids {
                    replace_exercises(conn, &target, ids)?;
                }
                let row = scheduled_workouts::table
                    .find(&target)
                    .first::<ScheduledWorkoutDB>(conn)
                    .into_core()?;
                expand(conn, row)
            })
            .await
    }

    async fn delete(&self, user_id: &str, scheduled_id: &str) -> Result<usize> {
        let user = user_id.to_string();
        let target = scheduled_id.to_string();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(
                    scheduled_workouts::table
                        .find(&target)
                        .filter(scheduled_workouts::owner_id.eq(&user)),
                )
                .execute(conn)
                .into_core()
            })
            .await
    }

    async fn complete(&self, user_id: &str, scheduled_id: &str) -> Result<ScheduledWorkout> {
        let user = user_id.to_string();
        let target = scheduled_id.to_string();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<ScheduledWorkout> {
                let affected = diesel::update(
                    scheduled_workouts::table
                        .find(&target)
                        .filter(scheduled_workouts::owner_id.eq(&user)),
                )
                .set(scheduled_workouts::is_completed.eq(true))
                .execute(conn)
                .into_core()?;
                if affected == 0 {
                    return Err(Error::not_found(format!("Scheduled workout {}", target)));
                }
                let row = scheduled_workouts::table
                    .find(&target)
                    .first::<ScheduledWorkoutDB>(conn)
                    .into_core()?;
                expand(conn, row)
            })
            .await
    }

    async fn start(
        &self,
        user_id: &str,
        scheduled_id: &str,
        now: DateTime<Utc>,
    ) -> Result<StartedWorkout> {
        let user = user_id.to_string();
        let target = scheduled_id.to_string();

        // Check, create and link run in the writer's transaction, so a
        // concurrent second start observes the link and is rejected.
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<StartedWorkout> {
                let row = find_row(conn, &user, &target)?
                    .ok_or_else(|| Error::not_found(format!("Scheduled workout {}", target)))?;
                if row.workout_id.is_some() {
                    return Err(Error::Validation(ValidationError::AlreadyStarted));
                }

                let new_workout = NewWorkoutDB {
                    id: Uuid::new_v4().to_string(),
                    owner_id: user.clone(),
                    start_time: now.naive_utc(),
                    end_time: None,
                    status: WorkoutStatus::Started.as_str().to_string(),
                    note: None,
                };
                diesel::insert_into(workouts::table)
                    .values(&new_workout)
                    .execute(conn)
                    .into_core()?;

                diesel::update(scheduled_workouts::table.find(&target))
                    .set(scheduled_workouts::workout_id.eq(Some(new_workout.id.clone())))
                    .execute(conn)
                    .into_core()?;

                let row = scheduled_workouts::table
                    .find(&target)
                    .first::<ScheduledWorkoutDB>(conn)
                    .into_core()?;
                let scheduled = expand(conn, row)?;
                Ok(StartedWorkout {
                    scheduled,
                    workout_id: new_workout.id,
                })
            })
            .await
    }
}
