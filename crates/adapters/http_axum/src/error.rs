//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use sandbox_domain::error::{SandboxError, ValidationError};

/// JSON error body returned by every endpoint.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`SandboxError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(SandboxError);

impl From<SandboxError> for ApiError {
    fn from(err: SandboxError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(ValidationError::InvalidBody(rejection.body_text()).into())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(ValidationError::InvalidQuery(rejection.body_text()).into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            SandboxError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            SandboxError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            SandboxError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use sandbox_domain::error::NotFoundError;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_map_validation_to_bad_request() {
        let err = ApiError::from(SandboxError::from(ValidationError::MissingParameter {
            name: "name",
        }));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Parameter 'name' is required" })
        );
    }

    #[tokio::test]
    async fn should_map_absence_to_not_found() {
        let err = ApiError::from(SandboxError::from(NotFoundError {
            entity: "Counter",
            key: "1".to_string(),
        }));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Counter not found" })
        );
    }

    #[tokio::test]
    async fn should_hide_storage_details_from_clients() {
        let err = ApiError::from(SandboxError::Storage("disk I/O error: /var/db".into()));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "internal server error" })
        );
    }
}
