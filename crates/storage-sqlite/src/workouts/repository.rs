use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use trainlog_core::workouts::{
    NewWorkout, Workout, WorkoutRepositoryTrait, WorkoutStatus, WorkoutUpdate,
};
use trainlog_core::{Error, Result};

use super::model::{NewWorkoutDB, WorkoutDB, WorkoutUpdateDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::workouts;
use crate::schema::workouts::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use uuid::Uuid;

pub struct WorkoutRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl WorkoutRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        WorkoutRepository { pool, writer }
    }
}

#[async_trait]
impl WorkoutRepositoryTrait for WorkoutRepository {
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Workout>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = workouts
            .filter(owner_id.eq(user_id))
            .order(start_time.desc())
            .load::<WorkoutDB>(&mut conn)
            .into_core()?;
        rows.into_iter()
            .map(|row| Workout::try_from(row).map_err(Error::from))
            .collect()
    }

    fn list_between(
        &self,
        user_id: &str,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<Vec<Workout>> {
        let mut conn = get_connection(&self.pool)?;
        // Half-open instant range covering the inclusive date range.
        let range_start = date_from.and_time(NaiveTime::MIN);
        let range_end = (date_to + Duration::days(1)).and_time(NaiveTime::MIN);
        let rows = workouts
            .filter(owner_id.eq(user_id))
            .filter(start_time.ge(range_start))
            .filter(start_time.lt(range_end))
            .order(start_time.asc())
            .load::<WorkoutDB>(&mut conn)
            .into_core()?;
        rows.into_iter()
            .map(|row| Workout::try_from(row).map_err(Error::from))
            .collect()
    }

    fn find_for_user(&self, user_id: &str, workout_id: &str) -> Result<Option<Workout>> {
        let mut conn = get_connection(&self.pool)?;
        let row = workouts
            .find(workout_id)
            .filter(owner_id.eq(user_id))
            .first::<WorkoutDB>(&mut conn)
            .optional()
            .into_core()?;
        row.map(|r| Workout::try_from(r).map_err(Error::from))
            .transpose()
    }

    async fn insert(
        &self,
        user_id: &str,
        new_workout: NewWorkout,
        workout_start: DateTime<Utc>,
    ) -> Result<Workout> {
        let user = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Workout> {
                let new_db = NewWorkoutDB::from_domain(
                    new_workout,
                    Uuid::new_v4().to_string(),
                    user,
                    workout_start,
                );

                let result_db = diesel::insert_into(workouts::table)
                    .values(&new_db)
                    .returning(WorkoutDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Workout::try_from(result_db)?)
            })
            .await
    }

    async fn update(
        &self,
        user_id: &str,
        workout_id: &str,
        update: WorkoutUpdate,
    ) -> Result<Workout> {
        let user = user_id.to_string();
        let target = workout_id.to_string();
        let update_db = WorkoutUpdateDB::from(update);

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Workout> {
                let affected =
                    diesel::update(workouts.find(&target).filter(owner_id.eq(&user)))
                        .set(&update_db)
                        .execute(conn)
                        .into_core()?;
                if affected == 0 {
                    return Err(Error::not_found(format!("Workout {}", target)));
                }
                let result_db = workouts.find(&target).first::<WorkoutDB>(conn).into_core()?;
                Ok(Workout::try_from(result_db)?)
            })
            .await
    }

    async fn finish(
        &self,
        user_id: &str,
        workout_id: &str,
        workout_end: DateTime<Utc>,
    ) -> Result<Workout> {
        let user = user_id.to_string();
        let target = workout_id.to_string();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Workout> {
                let affected =
                    diesel::update(workouts.find(&target).filter(owner_id.eq(&user)))
                        .set((
                            status.eq(WorkoutStatus::Finished.as_str()),
                            end_time.eq(Some(workout_end.naive_utc())),
                        ))
                        .execute(conn)
                        .into_core()?;
                if affected == 0 {
                    return Err(Error::not_found(format!("Workout {}", target)));
                }
                let result_db = workouts.find(&target).first::<WorkoutDB>(conn).into_core()?;
                Ok(Workout::try_from(result_db)?)
            })
            .await
    }

    async fn delete(&self, user_id: &str, workout_id: &str) -> Result<usize> {
        let user = user_id.to_string();
        let target = workout_id.to_string();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(workouts.find(&target).filter(owner_id.eq(&user)))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
