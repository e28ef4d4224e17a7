//! User: a named account; names are not unique.

use serde::{Deserialize, Serialize};

use crate::error::{SandboxError, ValidationError};
use crate::id::UserId;

/// A stored user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

/// A user that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
}

impl NewUser {
    /// Build and validate a new user.
    ///
    /// # Errors
    ///
    /// Returns [`SandboxError::Validation`] when `name` is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, SandboxError> {
        let user = Self { name: name.into() };
        user.validate()?;
        Ok(user)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SandboxError::Validation`] when `name` is blank.
    pub fn validate(&self) -> Result<(), SandboxError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "name" }.into());
        }
        Ok(())
    }

    /// Attach the id assigned by storage.
    #[must_use]
    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_user_when_name_provided() {
        let user = NewUser::new("alice").unwrap();
        assert_eq!(user.name, "alice");
    }

    #[test]
    fn should_reject_empty_name() {
        assert!(matches!(
            NewUser::new(""),
            Err(SandboxError::Validation(ValidationError::EmptyField {
                field: "name"
            }))
        ));
    }

    #[test]
    fn should_serialize_as_id_and_name() {
        let user = NewUser::new("bob").unwrap().with_id(UserId::from_raw(9));
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 9, "name": "bob" }));
    }
}
