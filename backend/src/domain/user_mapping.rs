//! Field-by-field conversion between [`User`] and [`UserDto`].

use super::user::{User, UserDto, UserId};

/// Map a persisted user to its transfer shape. Unsaved users map to id `0`.
pub fn to_dto(user: &User) -> UserDto {
    UserDto {
        id: user.id().map_or(0, UserId::get),
        first_name: user.first_name().to_owned(),
        last_name: user.last_name().to_owned(),
        email: user.email().to_owned(),
    }
}

/// Map a transfer shape to an entity, copying the id verbatim.
pub fn to_entity(dto: UserDto) -> User {
    let UserDto {
        id,
        first_name,
        last_name,
        email,
    } = dto;
    User::new(Some(UserId::new(id)), first_name, last_name, email)
}

impl From<&User> for UserDto {
    fn from(value: &User) -> Self {
        to_dto(value)
    }
}

impl From<UserDto> for User {
    fn from(value: UserDto) -> Self {
        to_entity(value)
    }
}
