//! Embedded Diesel migrations for the users schema.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use crate::domain::ports::UserPersistenceError;

/// Migrations compiled from `backend/migrations`.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Apply pending migrations using a blocking connection.
///
/// Call from a blocking context (e.g. `tokio::task::spawn_blocking`).
///
/// # Errors
///
/// Returns [`UserPersistenceError::Connection`] when the database cannot be
/// reached and [`UserPersistenceError::Query`] when a migration fails.
pub fn run_pending_migrations(database_url: &str) -> Result<(), UserPersistenceError> {
    let mut conn = PgConnection::establish(database_url)
        .map_err(|err| UserPersistenceError::connection(err.to_string()))?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| UserPersistenceError::query(format!("migration failed: {err}")))?;
    info!(count = applied.len(), "database migrations applied");
    Ok(())
}
