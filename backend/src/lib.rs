//! User management service library.
//!
//! - [`domain`]: user model, mapping, service, and ports.
//! - [`inbound`]: actix-web handlers exposing the ports over HTTP.
//! - [`outbound`]: PostgreSQL and in-memory repositories.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::{TRACE_ID_HEADER, Trace};
