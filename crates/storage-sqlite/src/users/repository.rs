use trainlog_core::users::{NewUser, User, UserRepositoryTrait};
use trainlog_core::Result;

use super::model::{NewUserDB, UserDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::users;
use crate::schema::users::dsl::*;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use uuid::Uuid;

pub struct UserRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        UserRepository { pool, writer }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn find_by_username(&self, lookup: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        let user_db = users
            .filter(username.eq(lookup))
            .first::<UserDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(user_db.map(User::from))
    }

    fn find_by_id(&self, user_id: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        let user_db = users
            .find(user_id)
            .first::<UserDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(user_db.map(User::from))
    }

    async fn insert(&self, new_user: NewUser) -> Result<User> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let new_user_db =
                    NewUserDB::from_domain(new_user, Uuid::new_v4().to_string(), Utc::now());

                let result_db = diesel::insert_into(users::table)
                    .values(&new_user_db)
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(User::from(result_db))
            })
            .await
    }
}
