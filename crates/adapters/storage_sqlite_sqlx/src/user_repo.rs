//! `SQLite` implementation of [`UserRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use sandbox_app::ports::UserRepository;
use sandbox_domain::error::SandboxError;
use sandbox_domain::id::UserId;
use sandbox_domain::user::{NewUser, User};

use crate::error::StorageError;

struct Wrapper(User);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<User> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;

        Ok(Self(User {
            id: UserId::from_raw(id),
            name,
        }))
    }
}

const INSERT: &str = "INSERT INTO users (name) VALUES (?) RETURNING id, name";
const SELECT_BY_NAME: &str = "SELECT id, name FROM users WHERE name = ? ORDER BY id LIMIT 1";

/// `SQLite`-backed user repository.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    async fn insert(&self, user: NewUser) -> Result<User, SandboxError> {
        let row: Wrapper = sqlx::query_as(INSERT)
            .bind(&user.name)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.0)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<User>, SandboxError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_NAME)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }
}
