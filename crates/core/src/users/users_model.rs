//! User domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain model representing a registered user.
///
/// The password hash never leaves the server; only [`UserProfile`] is
/// serialized into responses.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a user. The hash is produced by the caller
/// (the server's auth layer); this crate never sees raw passwords.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: Option<String>,
    pub password_hash: String,
}

/// Public representation of a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        UserProfile {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}
