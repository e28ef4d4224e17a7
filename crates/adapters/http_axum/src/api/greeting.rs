//! JSON handlers for the greeting service.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use sandbox_app::ports::GreetingRepository;

use crate::error::ApiError;
use crate::state::GreetingState;

/// Request body for posting a greeting.
#[derive(Deserialize)]
pub struct PostGreetingRequest {
    #[serde(default)]
    pub msg: String,
}

/// Response body of the get endpoint.
#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<MessageBody>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the post endpoint.
pub enum PostResponse {
    Created,
}

impl IntoResponse for PostResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created => StatusCode::CREATED.into_response(),
        }
    }
}

/// `GET /get`
pub async fn get<R>(State(state): State<GreetingState<R>>) -> Result<GetResponse, ApiError>
where
    R: GreetingRepository + Send + Sync + 'static,
{
    let greeting = state.service.random_greeting().await?;
    Ok(GetResponse::Ok(Json(MessageBody {
        message: greeting.message,
    })))
}

/// `POST /post`
pub async fn post<R>(
    State(state): State<GreetingState<R>>,
    body: Result<Json<PostGreetingRequest>, JsonRejection>,
) -> Result<PostResponse, ApiError>
where
    R: GreetingRepository + Send + Sync + 'static,
{
    let Json(req) = body?;
    state.service.post_greeting(req.msg).await?;
    Ok(PostResponse::Created)
}
