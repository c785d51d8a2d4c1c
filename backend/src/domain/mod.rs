//! Domain primitives, services, and ports.
//!
//! Purpose: hold the user model, the mapping between its persisted and
//! transfer shapes, and the service implementing the five user operations.
//! Nothing here depends on actix or Diesel.
//!
//! Public surface:
//! - [`User`], [`UserId`], [`UserDto`]: entity and transfer shapes.
//! - [`user_mapping`]: `to_dto` / `to_entity`.
//! - [`UserService`]: implementation of the driving ports.
//! - [`Error`], [`ErrorCode`]: transport-agnostic error envelope.
//! - [`TraceId`]: request correlation identifier.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_mapping;
pub mod user_service;

pub use self::error::{Error, ErrorCode};
pub use self::trace_id::TraceId;
pub use self::user::{User, UserDto, UserId};
pub use self::user_service::UserService;
