//! # sandbox-domain
//!
//! Pure domain model for the sandbox services.
//!
//! ## Responsibilities
//! - Foundational types: typed integer identifiers, error conventions
//! - Define the **Counter** (a single row whose value grows by deltas)
//! - Define **Greetings** (append-only messages, read back at random)
//! - Define **Users** (append-only, names are not unique)
//! - Contain all invariant enforcement (non-empty text, positive deltas)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod counter;
pub mod greeting;
pub mod user;
