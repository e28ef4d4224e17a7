//! `SQLite` implementation of [`CounterRepository`].

use std::future::Future;

use sqlx::error::ErrorKind;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use sandbox_app::ports::CounterRepository;
use sandbox_domain::counter::{Counter, Delta};
use sandbox_domain::error::{SandboxError, ValidationError};
use sandbox_domain::id::CounterId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Counter`].
struct Wrapper(Counter);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Counter> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let value: i64 = row.try_get("value")?;

        Ok(Self(Counter {
            id: CounterId::from_raw(id),
            value,
        }))
    }
}

const INSERT_SEED: &str = "INSERT INTO counter (id, value) VALUES (?, ?) ON CONFLICT (id) DO NOTHING";
const SELECT_BY_ID: &str = "SELECT id, value FROM counter WHERE id = ?";
const INCREMENT: &str = "UPDATE counter SET value = value + ? WHERE id = ?";

/// `SQLite`-backed counter repository.
pub struct SqliteCounterRepository {
    pool: SqlitePool,
}

impl SqliteCounterRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CounterRepository for SqliteCounterRepository {
    fn ensure_seed(&self) -> impl Future<Output = Result<(), SandboxError>> + Send {
        let pool = self.pool.clone();
        async move {
            let seed = Counter::seed();
            sqlx::query(INSERT_SEED)
                .bind(seed.id.as_raw())
                .bind(seed.value)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn get(
        &self,
        id: CounterId,
    ) -> impl Future<Output = Result<Option<Counter>, SandboxError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_raw())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn increment(
        &self,
        id: CounterId,
        delta: Delta,
    ) -> impl Future<Output = Result<bool, SandboxError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INCREMENT)
                .bind(delta.get())
                .bind(id.as_raw())
                .execute(&pool)
                .await
                .map_err(|err| {
                    if is_check_violation(&err) {
                        SandboxError::from(ValidationError::CounterOverflow)
                    } else {
                        StorageError::from(err).into()
                    }
                })?;

            Ok(result.rows_affected() > 0)
        }
    }
}

/// The `typeof(value) = 'integer'` check rejects an `UPDATE` that overflowed into a REAL.
fn is_check_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db| db.kind() == ErrorKind::CheckViolation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteCounterRepository {
        let db = Config::in_memory().build().await.unwrap();
        SqliteCounterRepository::new(db.pool().clone())
    }

    async fn row_count(repo: &SqliteCounterRepository) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM counter")
            .fetch_one(&repo.pool)
            .await
            .unwrap()
    }

    fn delta(n: i64) -> Delta {
        Delta::new(n).unwrap()
    }

    #[tokio::test]
    async fn should_return_none_when_table_is_empty() {
        let repo = setup().await;
        let result = repo.get(CounterId::SEED).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_insert_zero_row_when_seeding_empty_table() {
        let repo = setup().await;
        repo.ensure_seed().await.unwrap();

        let counter = repo.get(CounterId::SEED).await.unwrap().unwrap();
        assert_eq!(counter, Counter::seed());
        assert_eq!(row_count(&repo).await, 1);
    }

    #[tokio::test]
    async fn should_keep_single_row_when_seeding_repeatedly() {
        let repo = setup().await;
        repo.ensure_seed().await.unwrap();
        repo.increment(CounterId::SEED, delta(7)).await.unwrap();

        let (a, b) = tokio::join!(repo.ensure_seed(), repo.ensure_seed());
        a.unwrap();
        b.unwrap();

        assert_eq!(row_count(&repo).await, 1);
        let counter = repo.get(CounterId::SEED).await.unwrap().unwrap();
        assert_eq!(counter.value, 7);
    }

    #[tokio::test]
    async fn should_accumulate_increments() {
        let repo = setup().await;
        repo.ensure_seed().await.unwrap();

        assert!(repo.increment(CounterId::SEED, delta(5)).await.unwrap());
        assert!(repo.increment(CounterId::SEED, delta(3)).await.unwrap());

        let counter = repo.get(CounterId::SEED).await.unwrap().unwrap();
        assert_eq!(counter.value, 8);
    }

    #[tokio::test]
    async fn should_apply_every_concurrent_increment() {
        let repo = setup().await;
        repo.ensure_seed().await.unwrap();

        let (a, b, c, d) = tokio::join!(
            repo.increment(CounterId::SEED, delta(1)),
            repo.increment(CounterId::SEED, delta(2)),
            repo.increment(CounterId::SEED, delta(3)),
            repo.increment(CounterId::SEED, delta(4)),
        );
        for updated in [a, b, c, d] {
            assert!(updated.unwrap());
        }

        let counter = repo.get(CounterId::SEED).await.unwrap().unwrap();
        assert_eq!(counter.value, 10);
    }

    #[tokio::test]
    async fn should_reject_overflowing_increment_and_keep_value() {
        let repo = setup().await;
        repo.ensure_seed().await.unwrap();
        assert!(repo.increment(CounterId::SEED, delta(i64::MAX)).await.unwrap());

        let result = repo.increment(CounterId::SEED, delta(1)).await;
        assert!(matches!(
            result,
            Err(SandboxError::Validation(ValidationError::CounterOverflow))
        ));

        let counter = repo.get(CounterId::SEED).await.unwrap().unwrap();
        assert_eq!(counter.value, i64::MAX);
    }

    #[tokio::test]
    async fn should_report_no_update_when_row_missing() {
        let repo = setup().await;
        let updated = repo.increment(CounterId::SEED, delta(1)).await.unwrap();
        assert!(!updated);
        assert_eq!(row_count(&repo).await, 0);
    }
}
