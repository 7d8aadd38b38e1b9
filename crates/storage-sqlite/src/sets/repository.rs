use chrono::{NaiveDateTime, Utc};
use trainlog_core::sets::{
    NewWorkoutSet, SetWithExercise, WorkoutSet, WorkoutSetFilters, WorkoutSetRepositoryTrait,
    WorkoutSetUpdate,
};
use trainlog_core::{Error, Result};

use super::model::{NewWorkoutSetDB, WorkoutSetDB, WorkoutSetUpdateDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{exercises, workout_sets, workouts};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use uuid::Uuid;

pub struct WorkoutSetRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl WorkoutSetRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        WorkoutSetRepository { pool, writer }
    }
}

/// Subquery selecting the ids of the user's workouts; set writes are
/// scoped through it so a foreign set reads as missing.
fn owned_workout_ids(
    user_id: &str,
) -> workouts::BoxedQuery<'_, diesel::sqlite::Sqlite, diesel::sql_types::Text> {
    workouts::table
        .filter(workouts::owner_id.eq(user_id))
        .select(workouts::id)
        .into_boxed()
}

#[async_trait]
impl WorkoutSetRepositoryTrait for WorkoutSetRepository {
    fn list_for_user(&self, user_id: &str) -> Result<Vec<WorkoutSet>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = workout_sets::table
            .inner_join(workouts::table)
            .inner_join(exercises::table)
            .filter(workouts::owner_id.eq(user_id))
            .order(workout_sets::created_at.asc())
            .select((WorkoutSetDB::as_select(), exercises::name))
            .load::<(WorkoutSetDB, String)>(&mut conn)
            .into_core()?;
        Ok(rows
            .into_iter()
            .map(|(set_db, exercise_name)| set_db.into_domain(exercise_name))
            .collect())
    }

    fn find_for_user(&self, user_id: &str, set_id: &str) -> Result<Option<WorkoutSet>> {
        let mut conn = get_connection(&self.pool)?;
        let row = workout_sets::table
            .inner_join(workouts::table)
            .inner_join(exercises::table)
            .filter(workout_sets::id.eq(set_id))
            .filter(workouts::owner_id.eq(user_id))
            .select((WorkoutSetDB::as_select(), exercises::name))
            .first::<(WorkoutSetDB, String)>(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(|(set_db, exercise_name)| set_db.into_domain(exercise_name)))
    }

    fn list_with_exercise(
        &self,
        user_id: &str,
        filters: &WorkoutSetFilters,
    ) -> Result<Vec<SetWithExercise>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = workout_sets::table
            .inner_join(workouts::table)
            .inner_join(exercises::table)
            .filter(workouts::owner_id.eq(user_id))
            .into_boxed();

        if let Some(ref wid) = filters.workout_id {
            query = query.filter(workout_sets::workout_id.eq(wid.clone()));
        }
        if let Some(ref eid) = filters.exercise_id {
            query = query.filter(workout_sets::exercise_id.eq(eid.clone()));
        }
        if let Some(after) = filters.started_after {
            query = query.filter(workouts::start_time.ge(after));
        }
        if let Some(before) = filters.started_before {
            query = query.filter(workouts::start_time.lt(before));
        }

        let rows = query
            .order(workout_sets::created_at.asc())
            .select((
                WorkoutSetDB::as_select(),
                workouts::start_time,
                exercises::name,
                exercises::muscle_group,
            ))
            .load::<(WorkoutSetDB, NaiveDateTime, String, String)>(&mut conn)
            .into_core()?;

        rows.into_iter()
            .map(|(set_db, workout_start, exercise_name, group)| {
                set_db
                    .into_joined(workout_start, exercise_name, group)
                    .map_err(Error::from)
            })
            .collect()
    }

    async fn insert(&self, user_id: &str, new_set: NewWorkoutSet) -> Result<WorkoutSet> {
        let user = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<WorkoutSet> {
                // The parent workout must exist and belong to the caller.
                let parent = workouts::table
                    .find(&new_set.workout_id)
                    .filter(workouts::owner_id.eq(&user))
                    .select(workouts::id)
                    .first::<String>(conn)
                    .optional()
                    .into_core()?;
                if parent.is_none() {
                    return Err(Error::not_found(format!("Workout {}", new_set.workout_id)));
                }

                let new_db =
                    NewWorkoutSetDB::from_domain(new_set, Uuid::new_v4().to_string(), Utc::now());

                let result_db = diesel::insert_into(workout_sets::table)
                    .values(&new_db)
                    .returning(WorkoutSetDB::as_returning())
                    .get_result::<WorkoutSetDB>(conn)
                    .into_core()?;
                let exercise_name = exercises::table
                    .find(&result_db.exercise_id)
                    .select(exercises::name)
                    .first::<String>(conn)
                    .into_core()?;
                Ok(result_db.into_domain(exercise_name))
            })
            .await
    }

    async fn update(
        &self,
        user_id: &str,
        set_id: &str,
        update: WorkoutSetUpdate,
    ) -> Result<WorkoutSet> {
        let user = user_id.to_string();
        let target = set_id.to_string();
        let update_db = WorkoutSetUpdateDB::from(update);

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<WorkoutSet> {
                let affected = diesel::update(
                    workout_sets::table
                        .find(&target)
                        .filter(workout_sets::workout_id.eq_any(owned_workout_ids(&user))),
                )
                .set(&update_db)
                .execute(conn)
                .into_core()?;
                if affected == 0 {
                    return Err(Error::not_found(format!("Set {}", target)));
                }

                let result_db = workout_sets::table
                    .find(&target)
                    .first::<WorkoutSetDB>(conn)
                    .into_core()?;
                let exercise_name = exercises::table
                    .find(&result_db.exercise_id)
                    .select(exercises::name)
                    .first::<String>(conn)
                    .into_core()?;
                Ok(result_db.into_domain(exercise_name))
            })
            .await
    }

    async fn delete(&self, user_id: &str, set_id: &str) -> Result<usize> {
        let user = user_id.to_string();
        let target = set_id.to_string();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(
                    workout_sets::table
                        .find(&target)
                        .filter(workout_sets::workout_id.eq_any(owned_workout_ids(&user))),
                )
                .execute(conn)
                .into_core()
            })
            .await
    }
}
