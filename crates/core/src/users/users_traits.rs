use crate::errors::Result;
use crate::users::users_model::{NewUser, User};
use async_trait::async_trait;

/// Trait for user repository operations.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn find_by_username(&self, username: &str) -> Result<Option<User>>;
    fn find_by_id(&self, user_id: &str) -> Result<Option<User>>;
    async fn insert(&self, new_user: NewUser) -> Result<User>;
}
