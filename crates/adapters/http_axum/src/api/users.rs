//! JSON handlers for the users service.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use sandbox_app::ports::UserRepository;
use sandbox_domain::user::User;

use crate::error::ApiError;
use crate::state::UserState;

/// Query string of the lookup endpoint.
#[derive(Deserialize)]
pub struct UserQuery {
    pub name: Option<String>,
}

/// Request body for adding a user.
///
/// Clients may send an `id`; it is ignored because ids are generated.
#[derive(Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<User>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(String),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(name) => (
                StatusCode::CREATED,
                format!("User {name} added successfully"),
            )
                .into_response(),
        }
    }
}

/// `GET /api/user?name=`
pub async fn get<R>(
    State(state): State<UserState<R>>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> Result<GetResponse, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
{
    let Query(query) = query?;
    let user = state
        .service
        .find_user(query.name.as_deref().unwrap_or_default())
        .await?;
    Ok(GetResponse::Ok(Json(user)))
}

/// `POST /api/user`
pub async fn create<R>(
    State(state): State<UserState<R>>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    R: UserRepository + Send + Sync + 'static,
{
    let Json(req) = body?;
    let user = state.service.add_user(req.name).await?;
    Ok(CreateResponse::Created(user.name))
}
