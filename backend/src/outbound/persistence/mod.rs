//! Persistence adapters for the [`UserRepository`](crate::domain::ports::UserRepository) port.
//!
//! - [`DieselUserRepository`]: PostgreSQL via Diesel, `diesel-async`, and a
//!   `bb8` pool. Row structs and schema stay private to this module.
//! - [`InMemoryUserRepository`]: process-local map used when no database URL
//!   is configured and in tests.
//!
//! All failures are mapped to
//! [`UserPersistenceError`](crate::domain::ports::UserPersistenceError).
//!
//! # Example
//!
//! ```ignore
//! use user_service::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/users")).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_user_repository;
mod in_memory_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use in_memory_user_repository::InMemoryUserRepository;
pub use migrations::run_pending_migrations;
pub use pool::{DbPool, PoolConfig, PoolError};
