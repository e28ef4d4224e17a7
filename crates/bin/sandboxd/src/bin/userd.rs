//! # userd: users service
//!
//! Serves `GET /api/user?name=` and `POST /api/user`.

use sandboxd::config::{Config, Service};
use sandboxd::{server, telemetry, wiring};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    telemetry::init(&config.logging.filter);

    let db = wiring::connect(&config).await?;
    tracing::info!(url = %config.database_url(), "database ready");

    let app = wiring::users(db.pool().clone());
    server::serve(app, &config.bind_addr(Service::Users)).await?;

    Ok(())
}
