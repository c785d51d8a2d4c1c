//! User entity and transfer representation.
//!
//! [`User`] is the persisted shape owned by the repository. [`UserDto`] is
//! the shape exchanged with callers; conversions live in
//! [`crate::domain::user_mapping`].

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Store-assigned user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted user record.
///
/// ## Invariants
/// - `id` is `None` until the repository has stored the record and is never
///   changed afterwards.
/// - `email` is unique among users at the moment the record is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: Option<UserId>,
    first_name: String,
    last_name: String,
    email: String,
}

impl User {
    /// Build a user from its parts.
    ///
    /// # Examples
    /// ```
    /// use user_service::domain::{User, UserId};
    ///
    /// let user = User::new(Some(UserId::new(7)), "Ada", "Lovelace", "ada@example.com");
    /// assert_eq!(user.id(), Some(UserId::new(7)));
    /// assert_eq!(user.email(), "ada@example.com");
    /// ```
    pub fn new(
        id: Option<UserId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Identifier, once assigned by the store.
    pub fn id(&self) -> Option<UserId> {
        self.id
    }

    /// Given name.
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Family name.
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    /// Contact email.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Drop any identifier so the store assigns a fresh one on save.
    #[must_use]
    pub fn without_id(mut self) -> Self {
        self.id = None;
        self
    }

    /// Overwrite the mutable fields, leaving the identifier untouched.
    pub fn overwrite_details(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self.email = email.into();
    }
}

/// User representation exchanged with callers.
///
/// `id` reads as `0` when omitted or `null` in JSON, which is how create
/// requests normally arrive.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    /// Identifier; ignored on create, taken from the path on update.
    #[serde(default, deserialize_with = "null_id_as_zero")]
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email.
    pub email: String,
}

impl UserDto {
    /// Build a DTO from its parts.
    pub fn new(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }
}

fn null_id_as_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn overwrite_details_keeps_identifier() {
        let mut user = User::new(Some(UserId::new(1)), "test", "test", "mail");
        user.overwrite_details("new", "new", "new");
        assert_eq!(user, User::new(Some(UserId::new(1)), "new", "new", "new"));
    }

    #[rstest]
    fn without_id_clears_identifier() {
        let user = User::new(Some(UserId::new(3)), "a", "b", "c").without_id();
        assert!(user.id().is_none());
    }

    #[rstest]
    fn dto_uses_camel_case_and_defaults_id() {
        let dto: UserDto = serde_json::from_value(json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com"
        }))
        .expect("valid payload");
        assert_eq!(dto, UserDto::new(0, "Ada", "Lovelace", "ada@example.com"));

        let value = serde_json::to_value(UserDto::new(4, "Ada", "Lovelace", "ada@example.com"))
            .expect("serialise dto");
        assert_eq!(value.get("firstName"), Some(&json!("Ada")));
        assert!(value.get("first_name").is_none());
        assert_eq!(value.get("id"), Some(&json!(4)));
    }

    #[rstest]
    fn dto_treats_null_id_as_unassigned() {
        let dto: UserDto = serde_json::from_value(json!({
            "id": null,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com"
        }))
        .expect("null id accepted");
        assert_eq!(dto.id, 0);
    }
}
