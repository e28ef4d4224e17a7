//! Counter service: use-cases for the single counter row.

use sandbox_domain::counter::{Counter, Delta};
use sandbox_domain::error::{NotFoundError, SandboxError};
use sandbox_domain::id::CounterId;

use crate::ports::CounterRepository;

/// Application service for reading and growing the counter.
pub struct CounterService<R> {
    repo: R,
}

impl<R: CounterRepository> CounterService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Make sure the counter row exists. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn ensure_seed(&self) -> Result<(), SandboxError> {
        self.repo.ensure_seed().await
    }

    /// Read the counter.
    ///
    /// # Errors
    ///
    /// Returns [`SandboxError::NotFound`] when the row is missing,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_counter(&self) -> Result<Counter, SandboxError> {
        self.repo
            .get(CounterId::SEED)
            .await?
            .ok_or_else(|| not_found(CounterId::SEED))
    }

    /// Add `count` to the counter and return the validated delta.
    ///
    /// # Errors
    ///
    /// Returns [`SandboxError::Validation`] when `count` is not positive,
    /// [`SandboxError::NotFound`] when the row is missing, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn increment(&self, count: i64) -> Result<Delta, SandboxError> {
        let delta = Delta::new(count)?;
        if self.repo.increment(CounterId::SEED, delta).await? {
            Ok(delta)
        } else {
            Err(not_found(CounterId::SEED))
        }
    }
}

fn not_found(id: CounterId) -> SandboxError {
    NotFoundError {
        entity: "Counter",
        key: id.to_string(),
    }
    .into()
}
