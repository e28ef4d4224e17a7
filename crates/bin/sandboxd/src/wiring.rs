//! Pool → repository → service → router wiring for each service.

use sandbox_adapter_http_axum::router;
use sandbox_adapter_http_axum::state::{CounterState, GreetingState, UserState};
use sandbox_adapter_storage_sqlite_sqlx::error::StorageError;
use sandbox_adapter_storage_sqlite_sqlx::{
    Config as StorageConfig, Database, SqliteCounterRepository, SqliteGreetingRepository,
    SqlitePool, SqliteUserRepository,
};
use sandbox_app::services::counter_service::CounterService;
use sandbox_app::services::greeting_service::GreetingService;
use sandbox_app::services::user_service::UserService;
use sandbox_domain::error::SandboxError;

use crate::config::Config;

/// Open the pool described by `config` and run migrations.
///
/// # Errors
///
/// Returns [`StorageError`] if the connection or migrations fail.
pub async fn connect(config: &Config) -> Result<Database, StorageError> {
    StorageConfig {
        database_url: config.database_url().to_string(),
        max_connections: config.database.max_connections,
    }
    .build()
    .await
}

/// Build the counter router, seeding the counter row first.
///
/// # Errors
///
/// Returns a storage error if the seed insert fails.
pub async fn counter(pool: SqlitePool) -> Result<axum::Router, SandboxError> {
    let service = CounterService::new(SqliteCounterRepository::new(pool));
    service.ensure_seed().await?;
    Ok(router::counter(CounterState::new(service)))
}

/// Build the greeting router.
#[must_use]
pub fn greeting(pool: SqlitePool) -> axum::Router {
    let service = GreetingService::new(SqliteGreetingRepository::new(pool));
    router::greeting(GreetingState::new(service))
}

/// Build the users router.
#[must_use]
pub fn users(pool: SqlitePool) -> axum::Router {
    let service = UserService::new(SqliteUserRepository::new(pool));
    router::users(UserState::new(service))
}
