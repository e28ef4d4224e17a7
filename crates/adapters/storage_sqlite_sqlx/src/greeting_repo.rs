//! `SQLite` implementation of [`GreetingRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use sandbox_app::ports::GreetingRepository;
use sandbox_domain::error::SandboxError;
use sandbox_domain::greeting::{Greeting, NewGreeting};
use sandbox_domain::id::GreetingId;

use crate::error::StorageError;

struct Wrapper(Greeting);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Greeting> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let message: String = row.try_get("message")?;

        Ok(Self(Greeting {
            id: GreetingId::from_raw(id),
            message,
        }))
    }
}

const INSERT: &str = "INSERT INTO greetings (message) VALUES (?) RETURNING id, message";
const SELECT_RANDOM: &str = "SELECT id, message FROM greetings ORDER BY RANDOM() LIMIT 1";

/// `SQLite`-backed greeting repository.
pub struct SqliteGreetingRepository {
    pool: SqlitePool,
}

impl SqliteGreetingRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl GreetingRepository for SqliteGreetingRepository {
    async fn insert(&self, greeting: NewGreeting) -> Result<Greeting, SandboxError> {
        let row: Wrapper = sqlx::query_as(INSERT)
            .bind(&greeting.message)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.0)
    }

    async fn random(&self) -> Result<Option<Greeting>, SandboxError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_RANDOM)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteGreetingRepository {
        let db = Config::in_memory().build().await.unwrap();
        SqliteGreetingRepository::new(db.pool().clone())
    }

    #[tokio::test]
    async fn should_return_none_when_no_greetings_stored() {
        let repo = setup().await;
        assert!(repo.random().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_assign_increasing_ids_on_insert() {
        let repo = setup().await;
        let first = repo.insert(NewGreeting::new("hello").unwrap()).await.unwrap();
        let second = repo.insert(NewGreeting::new("bonjour").unwrap()).await.unwrap();

        assert_eq!(first.message, "hello");
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn should_only_return_stored_messages() {
        let repo = setup().await;
        let messages = ["hello", "hola", "privet"];
        for msg in messages {
            repo.insert(NewGreeting::new(msg).unwrap()).await.unwrap();
        }

        for _ in 0..20 {
            let greeting = repo.random().await.unwrap().unwrap();
            assert!(messages.contains(&greeting.message.as_str()));
        }
    }

    #[tokio::test]
    async fn should_eventually_pick_every_message() {
        let repo = setup().await;
        repo.insert(NewGreeting::new("hello").unwrap()).await.unwrap();
        repo.insert(NewGreeting::new("hola").unwrap()).await.unwrap();

        let mut seen_hola = false;
        for _ in 0..200 {
            if repo.random().await.unwrap().unwrap().message == "hola" {
                seen_hola = true;
                break;
            }
        }
        assert!(seen_hola);
    }
}
