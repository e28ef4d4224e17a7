//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`SandboxError`] via `#[from]`, so handlers only ever match on three
//! tiers: validation, absence, storage failure.

use std::error::Error as StdError;

/// Top-level error shared by services and adapters.
#[derive(Debug, thiserror::Error)]
pub enum SandboxError {
    /// The input was rejected before any storage access.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A lookup that expects one row matched none.
    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    /// The storage backend failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn StdError + Send + Sync>),
}

/// Input rejected by a domain invariant or by request parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required text field is absent or blank.
    #[error("Parameter '{field}' is required")]
    EmptyField { field: &'static str },

    /// A required query parameter is absent or blank.
    #[error("Parameter '{name}' is required")]
    MissingParameter { name: &'static str },

    /// Counter deltas must be strictly positive.
    #[error("Parameter 'count' must be positive, got {0}")]
    NonPositiveDelta(i64),

    /// Adding the delta would overflow the stored counter.
    #[error("Parameter 'count' is too large: the counter would overflow")]
    CounterOverflow,

    /// The request body could not be decoded.
    #[error("Invalid JSON format: {0}")]
    InvalidBody(String),

    /// The query string could not be decoded.
    #[error("Invalid query string: {0}")]
    InvalidQuery(String),
}

/// Zero rows matched a query that expects exactly one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Human-readable record kind (`"Counter"`, `"User"`, …).
    pub entity: &'static str,
    /// The selector that matched nothing.
    pub key: String,
}
