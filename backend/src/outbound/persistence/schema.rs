//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations`. `diesel print-schema` regenerates this
//! file from a live database.

diesel::table! {
    /// Registered users. `id` is a server-assigned `BIGSERIAL`.
    users (id) {
        /// Primary key.
        id -> Int8,
        /// Given name.
        first_name -> Varchar,
        /// Family name.
        last_name -> Varchar,
        /// Contact email (indexed, not unique).
        email -> Varchar,
    }
}
