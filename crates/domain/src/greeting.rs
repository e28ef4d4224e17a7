//! Greeting: an append-only message, read back at random.

use serde::{Deserialize, Serialize};

use crate::error::{SandboxError, ValidationError};
use crate::id::GreetingId;

/// A stored greeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub id: GreetingId,
    pub message: String,
}

/// A greeting that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGreeting {
    pub message: String,
}

impl NewGreeting {
    /// Build and validate a new greeting.
    ///
    /// # Errors
    ///
    /// Returns [`SandboxError::Validation`] when `message` is blank.
    pub fn new(message: impl Into<String>) -> Result<Self, SandboxError> {
        let greeting = Self {
            message: message.into(),
        };
        greeting.validate()?;
        Ok(greeting)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SandboxError::Validation`] when `message` is blank.
    pub fn validate(&self) -> Result<(), SandboxError> {
        if self.message.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "msg" }.into());
        }
        Ok(())
    }

    /// Attach the id assigned by storage.
    #[must_use]
    pub fn with_id(self, id: GreetingId) -> Greeting {
        Greeting {
            id,
            message: self.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_greeting_when_message_provided() {
        let greeting = NewGreeting::new("hello").unwrap();
        assert_eq!(greeting.message, "hello");
    }

    #[test]
    fn should_reject_blank_message() {
        assert!(matches!(
            NewGreeting::new("   "),
            Err(SandboxError::Validation(ValidationError::EmptyField {
                field: "msg"
            }))
        ));
    }

    #[test]
    fn should_keep_message_when_id_attached() {
        let greeting = NewGreeting::new("hi").unwrap().with_id(GreetingId::from_raw(3));
        assert_eq!(greeting.id.as_raw(), 3);
        assert_eq!(greeting.message, "hi");
    }
}
