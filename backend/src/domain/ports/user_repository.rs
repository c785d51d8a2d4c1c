//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Storage contract for [`User`] records.
///
/// Every method is a single round trip; the port promises nothing across
/// calls, so a read followed by a write is not atomic.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch the user holding `email`, if any.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch every stored user ordered by identifier.
    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Insert or update a user and return the stored record.
    ///
    /// A user without an identifier is inserted and receives a fresh one.
    /// A user with an identifier overwrites the matching row; a missing row
    /// is reported as [`UserPersistenceError::Query`].
    async fn save(&self, user: &User) -> Result<User, UserPersistenceError>;

    /// Remove the user with the given identifier.
    async fn delete_by_id(&self, id: &UserId) -> Result<(), UserPersistenceError>;
}
