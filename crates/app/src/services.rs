//! Application services: use-case implementations.
//!
//! Each service struct accepts a port trait implementation via a generic
//! parameter (constructor injection), keeping this layer decoupled from
//! concrete adapters. Every operation makes at most one repository call.

pub mod counter_service;
pub mod greeting_service;
pub mod user_service;
