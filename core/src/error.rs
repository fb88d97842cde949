//! Errors returned by `AssetClient` parse methods.
//!
//! The server answers 400 and 404 with a plain-text reason; both get their
//! own variant so callers can tell a rejected payload from a missing asset.

/// Errors returned by `AssetClient`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server returned 404: no asset exists at that URI.
    #[error("asset not found")]
    NotFound,

    /// The server returned 400: invalid URI or missing note.
    #[error("bad request: {body}")]
    BadRequest { body: String },

    /// Any other unexpected status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
