//! Request body extraction.
//!
//! Every create and update endpoint accepts the same kind of body: a JSON
//! object with at least one key. [`Payload`] hands the handler either the
//! decoded value or the [`ValidationError`] describing why the body was
//! refused, so the handler can run its own existence checks first.
//!
//! The one request [`Payload`] rejects itself is a body over axum's default
//! body limit (2 MB), answered with 413.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use hbnb_domain::error::ValidationError;

use crate::error::PayloadTooLarge;

/// A JSON object body decoded into `T`, or the reason it could not be.
pub struct Payload<T>(pub Result<T, ValidationError>);

impl<T> Payload<T> {
    /// Return the decoded value or the validation error.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] recorded during extraction.
    pub fn into_inner(self) -> Result<T, ValidationError> {
        self.0
    }
}

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = PayloadTooLarge;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let parsed = match Bytes::from_request(req, state).await {
            Ok(bytes) => decode(&bytes),
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                return Err(PayloadTooLarge);
            }
            Err(_) => Err(ValidationError::NotAJson),
        };
        Ok(Self(parsed))
    }
}

/// Decode `bytes` as a non-empty JSON object, then as `T`.
fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ValidationError> {
    let value: Value = serde_json::from_slice(bytes).map_err(|_| ValidationError::NotAJson)?;
    match &value {
        Value::Object(map) if !map.is_empty() => {}
        _ => return Err(ValidationError::NotAJson),
    }
    serde_json::from_value(value).map_err(|err| ValidationError::InvalidBody(err.to_string()))
}
