//! Counter: a single row whose value only grows by caller-supplied deltas.

use serde::{Deserialize, Serialize};

use crate::error::{SandboxError, ValidationError};
use crate::id::CounterId;

/// The persisted counter row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    pub id: CounterId,
    pub value: i64,
}

impl Counter {
    /// The row inserted when the table is empty.
    #[must_use]
    pub const fn seed() -> Self {
        Self {
            id: CounterId::SEED,
            value: 0,
        }
    }
}

/// A validated, strictly positive increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delta(i64);

impl Delta {
    /// Validate a raw increment.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyField`] for zero (the wire format
    /// cannot tell zero from an absent field) and
    /// [`ValidationError::NonPositiveDelta`] for negative values.
    pub fn new(raw: i64) -> Result<Self, SandboxError> {
        match raw {
            0 => Err(ValidationError::EmptyField { field: "count" }.into()),
            n if n < 0 => Err(ValidationError::NonPositiveDelta(n).into()),
            n => Ok(Self(n)),
        }
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}
