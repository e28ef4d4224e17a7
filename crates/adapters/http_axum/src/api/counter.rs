//! JSON handlers for the counter service.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use sandbox_app::ports::CounterRepository;
use sandbox_domain::counter::Counter;

use crate::error::ApiError;
use crate::state::CounterState;

/// Request body for incrementing the counter.
///
/// A missing `count` decodes as zero and is rejected by validation.
#[derive(Deserialize)]
pub struct IncrementRequest {
    #[serde(default)]
    pub count: i64,
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Counter>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the increment endpoint.
pub enum IncrementResponse {
    Increased(i64),
}

impl IntoResponse for IncrementResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Increased(delta) => format!("Counter increased by {delta}").into_response(),
        }
    }
}

/// `GET /count`
pub async fn get<R>(State(state): State<CounterState<R>>) -> Result<GetResponse, ApiError>
where
    R: CounterRepository + Send + Sync + 'static,
{
    let counter = state.service.get_counter().await?;
    Ok(GetResponse::Ok(Json(counter)))
}

/// `POST /count`
pub async fn increment<R>(
    State(state): State<CounterState<R>>,
    body: Result<Json<IncrementRequest>, JsonRejection>,
) -> Result<IncrementResponse, ApiError>
where
    R: CounterRepository + Send + Sync + 'static,
{
    let Json(req) = body?;
    let delta = state.service.increment(req.count).await?;
    Ok(IncrementResponse::Increased(delta.get()))
}
