//! # sandbox-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON endpoints of the three services:
//!   - counter: `GET /count`, `POST /count`
//!   - greeting: `GET /get`, `POST /post`
//!   - users: `GET /api/user?name=`, `POST /api/user`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses: validation → 400,
//!   absence → 404, storage failure → 500
//! - Wrap every router in request tracing and panic recovery layers
//!
//! ## Dependency rule
//! Depends on `sandbox-app` (for port traits and services) and `sandbox-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
