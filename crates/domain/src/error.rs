//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`HbnbError`]
//! via `From`. Adapters decide how each variant is presented.

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum HbnbError {
    /// The request payload was rejected.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A referenced object does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The storage backend failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Reasons a payload can be rejected before anything is persisted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The body is absent, is not JSON, or is not a non-empty JSON object.
    #[error("Not a JSON")]
    NotAJson,

    /// A field required at creation time is absent.
    #[error("Missing {0}")]
    MissingField(&'static str),

    /// The body is a JSON object but a field has an unexpected shape.
    #[error("Invalid body: {0}")]
    InvalidBody(String),
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of object that was looked up (`"State"`, `"Place"`, …).
    pub entity: &'static str,
    /// The identifier that was requested.
    pub id: String,
}
