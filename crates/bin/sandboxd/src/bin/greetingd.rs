//! # greetingd: greeting service
//!
//! Serves `GET /get` (a random stored greeting) and `POST /post`.

use sandboxd::config::{Config, Service};
use sandboxd::{server, telemetry, wiring};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    telemetry::init(&config.logging.filter);

    let db = wiring::connect(&config).await?;
    tracing::info!(url = %config.database_url(), "database ready");

    let app = wiring::greeting(db.pool().clone());
    server::serve(app, &config.bind_addr(Service::Greeting)).await?;

    Ok(())
}
