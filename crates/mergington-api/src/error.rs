//! Error types for the activities API.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Every
//! error body has the shape `{"detail": "<reason>"}`.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mergington_core::StoreError;
use mergington_types::ErrorDetail;

/// Detail returned when the activity name matches nothing.
pub const ACTIVITY_NOT_FOUND: &str = "Activity not found";

/// Detail returned when the email is already on the roster.
pub const ALREADY_SIGNED_UP: &str = "Student is already signed up";

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The store refused the operation.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The path segment could not be decoded (e.g. invalid UTF-8).
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// The query string was missing a required parameter or malformed.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidPath(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidQuery(rejection.body_text())
    }
}

impl ApiError {
    /// HTTP status this error maps to.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Store(StoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Store(StoreError::AlreadyRegistered { .. }) | Self::InvalidPath(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::InvalidQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            Self::Store(StoreError::NotFound { .. }) => ACTIVITY_NOT_FOUND.to_owned(),
            Self::Store(StoreError::AlreadyRegistered { .. }) => ALREADY_SIGNED_UP.to_owned(),
            Self::InvalidPath(msg) | Self::InvalidQuery(msg) => msg,
        };

        (status, axum::Json(ErrorDetail { detail })).into_response()
    }
}
