use trainlog_core::exercises::{Exercise, ExerciseRepositoryTrait, ExerciseUpdate, NewExercise};
use trainlog_core::{Error, Result};

use super::model::{ExerciseDB, ExerciseUpdateDB, NewExerciseDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::exercises;
use crate::schema::exercises::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use uuid::Uuid;

pub struct ExerciseRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl ExerciseRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        ExerciseRepository { pool, writer }
    }
}

#[async_trait]
impl ExerciseRepositoryTrait for ExerciseRepository {
    fn list_visible(&self, user_id: &str) -> Result<Vec<Exercise>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = exercises
            .filter(owner_id.is_null().or(owner_id.eq(user_id)))
            .order(name.asc())
            .load::<ExerciseDB>(&mut conn)
            .into_core()?;
        rows.into_iter()
            .map(|row| Exercise::try_from(row).map_err(Error::from))
            .collect()
    }

    fn find_visible(&self, user_id: &str, exercise_id: &str) -> Result<Option<Exercise>> {
        let mut conn = get_connection(&self.pool)?;
        let row = exercises
            .find(exercise_id)
            .filter(owner_id.is_null().or(owner_id.eq(user_id)))
            .first::<ExerciseDB>(&mut conn)
            .optional()
            .into_core()?;
        row.map(|r| Exercise::try_from(r).map_err(Error::from))
            .transpose()
    }

    async fn insert(&self, new_exercise: NewExercise) -> Result<Exercise> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Exercise> {
                let new_db = NewExerciseDB::from_domain(new_exercise, Uuid::new_v4().to_string());

                let result_db = diesel::insert_into(exercises::table)
                    .values(&new_db)
                    .returning(ExerciseDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Exercise::try_from(result_db)?)
            })
            .await
    }

    async fn update(
        &self,
        user_id: &str,
        exercise_id: &str,
        update: ExerciseUpdate,
    ) -> Result<Exercise> {
        let user = user_id.to_string();
        let target = exercise_id.to_string();
        let update_db = ExerciseUpdateDB::from(update);

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Exercise> {
                let affected = diesel::update(
                    exercises
                        .find(&target)
                        .filter(owner_id.is_null().or(owner_id.eq(&user))),
                )
                .set(&update_db)
                .execute(conn)
                .into_core()?;
                if affected == 0 {
                    return Err(Error::not_found(format!("Exercise {}", target)));
                }
                let result_db = exercises.find(&target).first::<ExerciseDB>(conn).into_core()?;
                Ok(Exercise::try_from(result_db)?)
            })
            .await
    }

    async fn delete(&self, user_id: &str, exercise_id: &str) -> Result<usize> {
        let user = user_id.to_string();
        let target = exercise_id.to_string();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(
                    exercises
                        .find(&target)
                        .filter(owner_id.is_null().or(owner_id.eq(&user))),
                )
                .execute(conn)
                .into_core()
            })
            .await
    }
}
