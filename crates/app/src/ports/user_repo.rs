//! User repository port: append-only user storage.

use std::future::Future;

use sandbox_domain::error::SandboxError;
use sandbox_domain::user::{NewUser, User};

/// Repository owning the `users` table.
pub trait UserRepository {
    /// Append a user and return it with its generated id.
    fn insert(&self, user: NewUser) -> impl Future<Output = Result<User, SandboxError>> + Send;

    /// Find the oldest user with exactly this name.
    fn find_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<User>, SandboxError>> + Send;
}
