//! Builds the HTTP state from the configured persistence backend.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use user_service::inbound::http::state::HttpState;
use user_service::outbound::persistence::{DbPool, DieselUserRepository, InMemoryUserRepository};

/// Wire the users ports to PostgreSQL when a pool is configured, otherwise to
/// a process-local store.
pub(super) fn build_http_state(db_pool: Option<&DbPool>) -> web::Data<HttpState> {
    let state = match db_pool {
        Some(pool) => {
            info!("users backed by PostgreSQL");
            HttpState::from_repository(Arc::new(DieselUserRepository::new(pool.clone())))
        }
        None => {
            warn!("no database configured; users are kept in memory and lost on restart");
            HttpState::from_repository(Arc::new(InMemoryUserRepository::new()))
        }
    };
    web::Data::new(state)
}
