//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports ([`UserRepository`]) describe what the domain needs from
//! infrastructure. Driving ports ([`UsersCommand`], [`UsersQuery`]) describe
//! what inbound adapters may ask of the domain.

mod macros;
pub(crate) use macros::define_port_error;

mod user_repository;
mod users_command;
mod users_error;
mod users_query;

#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
pub use users_command::UsersCommand;
pub use users_error::UserServiceError;
pub use users_query::UsersQuery;
