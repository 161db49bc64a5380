//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel models and
//! domain types. Row structs (`models.rs`) and the schema (`schema.rs`) are
//! internal details never exposed to the domain. Connections are pooled via
//! `bb8` through `diesel-async`.
//!
//! # Example
//!
//! ```ignore
//! use user_service::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/accounts")).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
