//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use homeboard_domain::error::HomeboardError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`HomeboardError`] to an HTTP response with appropriate status code.
pub struct ApiError(HomeboardError);

impl From<HomeboardError> for ApiError {
    fn from(err: HomeboardError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            HomeboardError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            HomeboardError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            HomeboardError::Source(err) => {
                tracing::error!(error = %err, "snapshot source error");
                (StatusCode::BAD_GATEWAY, "snapshot source unavailable".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
