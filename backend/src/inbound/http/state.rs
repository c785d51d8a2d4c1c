//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` so they depend only on the driving
//! ports and can be tested without I/O.

use std::sync::Arc;

use crate::domain::UserService;
use crate::domain::ports::{UserRepository, UsersCommand, UsersQuery};

/// Dependency bundle for the users handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Create, update, and delete operations.
    pub users_command: Arc<dyn UsersCommand>,
    /// Read operations.
    pub users_query: Arc<dyn UsersQuery>,
}

impl HttpState {
    /// Bundle explicit port implementations.
    pub fn new(users_command: Arc<dyn UsersCommand>, users_query: Arc<dyn UsersQuery>) -> Self {
        Self {
            users_command,
            users_query,
        }
    }

    /// Wire both ports to a single [`UserService`] over `repo`.
    pub fn from_repository<R>(repo: Arc<R>) -> Self
    where
        R: UserRepository + 'static,
    {
        let service = Arc::new(UserService::new(repo));
        Self::new(service.clone(), service)
    }
}
