//! # sandbox-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `sandbox-app::ports`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! Every repository operation is exactly one parameterized statement.
//! Zero matching rows come back as `Ok(None)`, never as an error.
//!
//! ## Dependency rule
//! Depends on `sandbox-app` (for port traits) and `sandbox-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod counter_repo;
pub mod error;
pub mod greeting_repo;
pub mod pool;
pub mod user_repo;

pub use counter_repo::SqliteCounterRepository;
pub use greeting_repo::SqliteGreetingRepository;
pub use pool::{Config, Database};
pub use sqlx::SqlitePool;
pub use user_repo::SqliteUserRepository;
