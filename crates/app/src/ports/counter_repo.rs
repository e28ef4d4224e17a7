//! Counter repository port: persistence for the single counter row.

use std::future::Future;

use sandbox_domain::counter::{Counter, Delta};
use sandbox_domain::error::SandboxError;
use sandbox_domain::id::CounterId;

/// Repository owning the `counter` table.
pub trait CounterRepository {
    /// Insert the seed row unless a row with its id already exists.
    ///
    /// Must be a single atomic statement so concurrent startups cannot
    /// create duplicate rows.
    fn ensure_seed(&self) -> impl Future<Output = Result<(), SandboxError>> + Send;

    /// Get the counter row, `None` when it does not exist.
    fn get(
        &self,
        id: CounterId,
    ) -> impl Future<Output = Result<Option<Counter>, SandboxError>> + Send;

    /// Add `delta` to the stored value in one `UPDATE`.
    ///
    /// Returns `false` when no row has the given id.
    fn increment(
        &self,
        id: CounterId,
        delta: Delta,
    ) -> impl Future<Output = Result<bool, SandboxError>> + Send;
}
