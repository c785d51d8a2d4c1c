//! Process-local `UserRepository` used when no database is configured.
//!
//! Records live in a `BTreeMap` keyed by id, so `find_all` is ordered by id.
//! Identifiers are assigned from a counter starting at 1 and are never
//! reused.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserId};

#[derive(Debug)]
struct Store {
    next_id: i64,
    users: BTreeMap<UserId, User>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            next_id: 1,
            users: BTreeMap::new(),
        }
    }
}

/// In-memory implementation of the [`UserRepository`] port.
///
/// # Examples
/// ```
/// use user_service::domain::User;
/// use user_service::domain::ports::UserRepository;
/// use user_service::outbound::persistence::InMemoryUserRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryUserRepository::new();
/// let saved = repo.save(&User::new(None, "Ada", "Lovelace", "ada@example.com")).await?;
/// assert_eq!(saved.id().map(|id| id.get()), Some(1));
/// # Ok::<(), user_service::domain::ports::UserPersistenceError>(())
/// # }).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    store: Mutex<Store>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, UserPersistenceError> {
        self.store
            .lock()
            .map_err(|_| UserPersistenceError::query("in-memory user store poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.lock()?.users.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserPersistenceError> {
        Ok(self
            .lock()?
            .users
            .values()
            .find(|user| user.email() == email)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.lock()?.users.values().cloned().collect())
    }

    async fn save(&self, user: &User) -> Result<User, UserPersistenceError> {
        let mut store = self.lock()?;
        match user.id() {
            None => {
                let id = UserId::new(store.next_id);
                store.next_id += 1;
                let stored = User::new(Some(id), user.first_name(), user.last_name(), user.email());
                store.users.insert(id, stored.clone());
                Ok(stored)
            }
            Some(id) => match store.users.get_mut(&id) {
                Some(existing) => {
                    existing.overwrite_details(user.first_name(), user.last_name(), user.email());
                    Ok(existing.clone())
                }
                None => Err(UserPersistenceError::query(format!(
                    "user {id} not found for update"
                ))),
            },
        }
    }

    async fn delete_by_id(&self, id: &UserId) -> Result<(), UserPersistenceError> {
        self.lock()?.users.remove(id);
        Ok(())
    }
}
