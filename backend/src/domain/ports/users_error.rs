//! Failures surfaced by the user management driving ports.

use serde_json::json;

use crate::domain::{Error, UserId};

use super::UserPersistenceError;

/// Typed failure of a user management operation.
///
/// Every variant is terminal for the operation: nothing was written when one
/// is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserServiceError {
    /// No resource matched the lookup.
    #[error("{resource} not found with {field} : '{value}'")]
    ResourceNotFound {
        /// Kind of resource looked up.
        resource: String,
        /// Field used for the lookup.
        field: String,
        /// Value that did not match.
        value: i64,
    },
    /// Another user already holds the requested email.
    #[error("{message}")]
    EmailAlreadyExists {
        /// Human-readable explanation.
        message: String,
    },
    /// The repository failed; passed through unchanged.
    #[error(transparent)]
    Persistence(#[from] UserPersistenceError),
}

impl UserServiceError {
    /// Lookup miss for a user identifier.
    ///
    /// # Examples
    /// ```
    /// use user_service::domain::UserId;
    /// use user_service::domain::ports::UserServiceError;
    ///
    /// let err = UserServiceError::user_not_found(UserId::new(10));
    /// assert_eq!(err.to_string(), "User not found with id : '10'");
    /// ```
    pub fn user_not_found(id: UserId) -> Self {
        Self::ResourceNotFound {
            resource: "User".to_owned(),
            field: "id".to_owned(),
            value: id.get(),
        }
    }

    /// Duplicate email at creation time.
    pub fn email_already_exists() -> Self {
        Self::EmailAlreadyExists {
            message: "Email Already Exists for User".to_owned(),
        }
    }
}

impl From<UserServiceError> for Error {
    fn from(value: UserServiceError) -> Self {
        let message = value.to_string();
        match value {
            UserServiceError::ResourceNotFound {
                resource,
                field,
                value,
            } => Error::not_found(message).with_details(json!({
                "resource": resource,
                "field": field,
                "value": value,
            })),
            UserServiceError::EmailAlreadyExists { .. } => Error::conflict(message)
                .with_details(json!({ "field": "email", "code": "email_already_exists" })),
            UserServiceError::Persistence(UserPersistenceError::Connection { message }) => {
                Error::service_unavailable(message)
            }
            UserServiceError::Persistence(UserPersistenceError::Query { message }) => {
                Error::internal(message)
            }
        }
    }
}
