//! # counterd: counter service
//!
//! Serves `GET /count` and `POST /count` over a single seeded counter row.

use sandboxd::config::{Config, Service};
use sandboxd::{server, telemetry, wiring};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    telemetry::init(&config.logging.filter);

    let db = wiring::connect(&config).await?;
    tracing::info!(url = %config.database_url(), "database ready");

    let app = wiring::counter(db.pool().clone()).await?;
    server::serve(app, &config.bind_addr(Service::Counter)).await?;

    Ok(())
}
