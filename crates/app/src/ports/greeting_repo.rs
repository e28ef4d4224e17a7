//! Greeting repository port: append-only greeting storage.

use std::future::Future;

use sandbox_domain::error::SandboxError;
use sandbox_domain::greeting::{Greeting, NewGreeting};

/// Repository owning the `greetings` table.
pub trait GreetingRepository {
    /// Append a greeting and return it with its generated id.
    fn insert(
        &self,
        greeting: NewGreeting,
    ) -> impl Future<Output = Result<Greeting, SandboxError>> + Send;

    /// Pick one stored greeting uniformly at random, `None` when the table is empty.
    fn random(&self) -> impl Future<Output = Result<Option<Greeting>, SandboxError>> + Send;
}
