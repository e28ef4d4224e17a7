//! # sandbox-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that storage adapters implement:
//!   - `CounterRepository`: seed, read, increment the counter row
//!   - `GreetingRepository`: append greetings, read one at random
//!   - `UserRepository`: append users, look one up by name
//! - Define **use-case services** that validate input, call exactly one
//!   port operation and turn absence into [`NotFoundError`](sandbox_domain::error::NotFoundError)
//!
//! ## Dependency rule
//! Depends on `sandbox-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
