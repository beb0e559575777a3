//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use hbnb_domain::error::{HbnbError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`HbnbError`] to an HTTP response with appropriate status code.
///
/// Lookups that miss always answer with the same `Not found` message, the
/// requested identifier is only logged.
#[derive(Debug)]
pub struct ApiError(HbnbError);

impl From<HbnbError> for ApiError {
    fn from(err: HbnbError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            HbnbError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            HbnbError::NotFound(err) => {
                tracing::debug!(entity = err.entity, id = %err.id, "not found");
                (StatusCode::NOT_FOUND, "Not found".to_string())
            }
            HbnbError::Storage(err) => {
                tracing::error!(error = ?err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Rejection for a request body over the configured size limit.
#[derive(Debug)]
pub struct PayloadTooLarge;

impl IntoResponse for PayloadTooLarge {
    fn into_response(self) -> Response {
        tracing::debug!("request body over size limit");
        let body = ErrorBody {
            error: "Payload too large".to_string(),
        };
        (StatusCode::PAYLOAD_TOO_LARGE, Json(body)).into_response()
    }
}
