//! Axum router assembly, one builder per service.
//!
//! Every router serves `GET /health` next to its own endpoints and is wrapped
//! in a [`CatchPanicLayer`] (a panicking handler becomes a 500 instead of
//! tearing the connection down) and a [`TraceLayer`] that logs each HTTP
//! request/response using the `tracing` ecosystem.

use axum::Router;
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use sandbox_app::ports::{CounterRepository, GreetingRepository, UserRepository};

use crate::api;
use crate::state::{CounterState, GreetingState, UserState};

/// Build the counter service router (`/count`).
pub fn counter<R>(state: CounterState<R>) -> Router
where
    R: CounterRepository + Send + Sync + 'static,
{
    let routes = Router::new()
        .route(
            "/count",
            get(api::counter::get::<R>).post(api::counter::increment::<R>),
        )
        .with_state(state);

    finish(routes)
}

/// Build the greeting service router (`/get`, `/post`).
pub fn greeting<R>(state: GreetingState<R>) -> Router
where
    R: GreetingRepository + Send + Sync + 'static,
{
    let routes = Router::new()
        .route("/get", get(api::greeting::get::<R>))
        .route("/post", post(api::greeting::post::<R>))
        .with_state(state);

    finish(routes)
}

/// Build the users service router (`/api/user`).
pub fn users<R>(state: UserState<R>) -> Router
where
    R: UserRepository + Send + Sync + 'static,
{
    let routes = Router::new()
        .route(
            "/api/user",
            get(api::users::get::<R>).post(api::users::create::<R>),
        )
        .with_state(state);

    finish(routes)
}

fn finish(routes: Router) -> Router {
    routes
        .route("/health", get(health_check))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}
