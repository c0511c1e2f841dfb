//! Mapping of request outcomes to HTTP status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures a handler reports to the client as plain text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Read of a note that is absent or unreadable.
    #[error("Note not found")]
    NotFound,

    /// Update or delete of a note that is absent.
    #[error("Note does not exist")]
    DoesNotExist,

    /// Create of a note whose name is already taken.
    #[error("Note already exists")]
    AlreadyExists,

    /// Malformed or incomplete form body.
    #[error("{0}")]
    BadRequest(String),

    /// Request body exceeded the configured limit.
    #[error("Request body too large")]
    PayloadTooLarge,

    /// The static form page could not be read.
    #[error("Failed to load form")]
    FormUnavailable,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound | ApiError::DoesNotExist => StatusCode::NOT_FOUND,
            ApiError::AlreadyExists | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::FormUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::DoesNotExist.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::AlreadyExists.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::PayloadTooLarge.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(ApiError::FormUnavailable.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
