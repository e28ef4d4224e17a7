//! # sandboxd: sandbox service daemons
//!
//! Composition roots for the three independent services. Each binary
//! (`counterd`, `greetingd`, `userd`) is a thin `main` over this library.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct the repository, inject it into its service, build the router
//! - Bind to a TCP port and serve until SIGINT/SIGTERM
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer, no domain logic belongs here.

pub mod config;
pub mod server;
pub mod telemetry;
pub mod wiring;
