//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{UserDto, UserId};

use super::UserServiceError;

/// Use-case port for creating, updating, and deleting users.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Create a user; fails with [`UserServiceError::EmailAlreadyExists`] when
    /// the email is taken. Any id on `user` is ignored.
    async fn create_user(&self, user: UserDto) -> Result<UserDto, UserServiceError>;

    /// Overwrite names and email of the user identified by `user.id`.
    async fn update_user(&self, user: UserDto) -> Result<UserDto, UserServiceError>;

    /// Delete the user with `id`.
    async fn delete_user(&self, id: UserId) -> Result<(), UserServiceError>;
}
