//! Database reset and schema helpers for embedded PostgreSQL suites.
//!
//! Resets go through the plain `postgres` client because `DROP DATABASE`
//! cannot run inside a transaction. Schema setup applies the service's own
//! embedded migrations so tests never drift from production DDL.

use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};
use user_service::domain::ports::UserPersistenceError;
use user_service::outbound::persistence::run_pending_migrations;

use super::format_postgres_error;

const MAINTENANCE_DB: &str = "postgres";

/// Drop and recreate `db_name` on the cluster.
pub fn reset_database(cluster: &TestCluster, db_name: &str) -> Result<(), UserPersistenceError> {
    let admin_url = cluster.connection().database_url(MAINTENANCE_DB);
    let mut client = Client::connect(&admin_url, NoTls)
        .map_err(|err| UserPersistenceError::connection(format_postgres_error(&err)))?;
    // Separate round trips: a multi-statement batch runs as one transaction.
    for statement in [
        format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"),
        format!("CREATE DATABASE \"{db_name}\""),
    ] {
        client
            .batch_execute(&statement)
            .map_err(|err| UserPersistenceError::query(format_postgres_error(&err)))?;
    }
    Ok(())
}

/// Apply all pending migrations to `url`.
pub fn migrate_schema(url: &str) -> Result<(), UserPersistenceError> {
    run_pending_migrations(url)
}
