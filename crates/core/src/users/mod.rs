//! Users module - account records behind authentication.

mod users_model;
mod users_traits;

pub use users_model::{NewUser, User, UserProfile};
pub use users_traits::UserRepositoryTrait;
