//! Driving port for user reads.
//!
//! Inbound adapters call this port to read users without importing outbound
//! persistence concerns.

use async_trait::async_trait;

use crate::domain::{UserDto, UserId};

use super::UserServiceError;

/// Use-case port for reading users.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return the user with `id`, or [`UserServiceError::ResourceNotFound`].
    async fn get_user_by_id(&self, id: UserId) -> Result<UserDto, UserServiceError>;

    /// Return every user in store order.
    async fn get_all_users(&self) -> Result<Vec<UserDto>, UserServiceError>;
}
