//! User management service.
//!
//! Implements the [`UsersCommand`] and [`UsersQuery`] driving ports on top
//! of a [`UserRepository`]. Each operation is a straight sequence of
//! repository calls; nothing is cached between requests.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{UserRepository, UserServiceError, UsersCommand, UsersQuery};
use crate::domain::user_mapping::{to_dto, to_entity};
use crate::domain::{User, UserDto, UserId};

/// User service implementing the driving ports.
#[derive(Clone)]
pub struct UserService<R> {
    user_repo: Arc<R>,
}

impl<R> UserService<R> {
    /// Create a new service backed by `user_repo`.
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    async fn require_user(&self, id: UserId) -> Result<User, UserServiceError> {
        self.user_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| UserServiceError::user_not_found(id))
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, user: UserDto) -> Result<UserDto, UserServiceError> {
        if self.user_repo.find_by_email(&user.email).await?.is_some() {
            debug!(email = %user.email, "rejecting user with taken email");
            return Err(UserServiceError::email_already_exists());
        }

        let entity = to_entity(user).without_id();
        let saved = self.user_repo.save(&entity).await?;
        info!(user_id = ?saved.id(), "user created");
        Ok(to_dto(&saved))
    }

    async fn update_user(&self, user: UserDto) -> Result<UserDto, UserServiceError> {
        let UserDto {
            id,
            first_name,
            last_name,
            email,
        } = user;
        let mut existing = self.require_user(UserId::new(id)).await?;

        // Email uniqueness is only checked on create.
        existing.overwrite_details(first_name, last_name, email);
        let updated = self.user_repo.save(&existing).await?;
        info!(user_id = id, "user updated");
        Ok(to_dto(&updated))
    }

    async fn delete_user(&self, id: UserId) -> Result<(), UserServiceError> {
        self.require_user(id).await?;
        self.user_repo.delete_by_id(&id).await?;
        info!(user_id = %id, "user deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository,
{
    async fn get_user_by_id(&self, id: UserId) -> Result<UserDto, UserServiceError> {
        let user = self.require_user(id).await?;
        Ok(to_dto(&user))
    }

    async fn get_all_users(&self) -> Result<Vec<UserDto>, UserServiceError> {
        let users = self.user_repo.find_all().await?;
        debug!(count = users.len(), "listing users");
        Ok(users.iter().map(to_dto).collect())
    }
}

#[cfg(test)]
mod tests;
