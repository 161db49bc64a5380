//! Diesel table definitions for the PostgreSQL schema.
//!
//! The schema is provisioned outside this service; these definitions must
//! match it exactly. `diesel print-schema` against a live database
//! regenerates them.

diesel::table! {
    /// Registered user accounts.
    users (id) {
        /// Primary key: `SERIAL` identifier assigned by the database.
        id -> Int4,
        name -> Varchar,
        surname -> Varchar,
        display_name -> Varchar,
        /// Login identifier; uniqueness is not enforced by this service.
        email -> Varchar,
        tel -> Varchar,
        /// Argon2 PHC string; never plaintext.
        password -> Varchar,
    }
}
