//! Request-level errors and their HTTP rendering.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::store::StoreError;

/// Methods served on the asset path, advertised on 405 responses.
pub const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE";

/// Errors returned by asset handlers. Each one ends the request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The payload's `uri` is missing or malformed.
    #[error("Must provide a valid URI.")]
    InvalidUri,

    /// An update arrived without a note.
    #[error("Must provide a note.")]
    MissingNote,

    /// No asset exists at the requested URI.
    #[error("Asset does not exist.")]
    NotFound,

    /// The method is not one of [`ALLOWED_METHODS`].
    #[error("Method not allowed.")]
    MethodNotAllowed,

    /// The backing store failed.
    #[error("Error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidUri | Self::MissingNote => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let content_type = [(header::CONTENT_TYPE, "text/plain; charset=utf-8")];
        let body = self.to_string();

        if let Self::MethodNotAllowed = self {
            return (status, [(header::ALLOW, ALLOWED_METHODS)], content_type, body).into_response();
        }
        (status, content_type, body).into_response()
    }
}
