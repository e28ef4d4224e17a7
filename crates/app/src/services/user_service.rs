//! User service: use-cases for the users table.

use sandbox_domain::error::{NotFoundError, SandboxError, ValidationError};
use sandbox_domain::user::{NewUser, User};

use crate::ports::UserRepository;

/// Application service for adding and looking up users.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Add a user. Duplicate names are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`SandboxError::Validation`] when `name` is blank, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn add_user(&self, name: String) -> Result<User, SandboxError> {
        let user = NewUser::new(name)?;
        self.repo.insert(user).await
    }

    /// Look a user up by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`SandboxError::Validation`] when `name` is blank (no storage
    /// access happens), [`SandboxError::NotFound`] when nobody has that
    /// name, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn find_user(&self, name: &str) -> Result<User, SandboxError> {
        if name.trim().is_empty() {
            return Err(ValidationError::MissingParameter { name: "name" }.into());
        }
        self.repo.find_by_name(name).await?.ok_or_else(|| {
            NotFoundError {
                entity: "User",
                key: name.to_string(),
            }
            .into()
        })
    }
}
