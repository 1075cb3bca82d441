//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use worklinker_store::StoreError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Fixed body of the duplicate-bid rejection. The frontend matches on this
/// literal text, so it must stay byte-identical.
pub const DUPLICATE_BID_MESSAGE: &str = "You have already placed a bid on this job!";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{DUPLICATE_BID_MESSAGE}")]
    DuplicateBid,

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Store error: {0}")]
    Store(StoreError),
}

impl ApiError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) | ApiError::Validation(_) | ApiError::DuplicateBid => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Internal(_) | ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidId(id) => ApiError::BadRequest(format!("Invalid document id: {id}")),
            StoreError::DuplicateBid => ApiError::DuplicateBid,
            other => ApiError::Store(other),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(err: ValidationErrors) -> Self {
        ApiError::Validation(err.to_string())
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // The duplicate-bid rejection is a plain-text contract, not JSON.
        if matches!(self, ApiError::DuplicateBid) {
            return (StatusCode::BAD_REQUEST, DUPLICATE_BID_MESSAGE).into_response();
        }

        let status = self.status_code();

        // Don't expose internal error details in production
        let detail = match &self {
            ApiError::Internal(_) | ApiError::Store(_) => {
                if std::env::var("ENVIRONMENT").unwrap_or_default() == "production" {
                    "An internal error occurred".to_string()
                } else {
                    self.to_string()
                }
            }
            _ => self.to_string(),
        };

        let body = ErrorResponse { detail };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_id_maps_to_bad_request() {
        let err = ApiError::from(StoreError::invalid_id("zzz"));
        assert!(matches!(err, ApiError::BadRequest(_)));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn duplicate_bid_maps_through() {
        let err = ApiError::from(StoreError::DuplicateBid);
        assert!(matches!(err, ApiError::DuplicateBid));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_is_404() {
        assert_eq!(
            ApiError::not_found("No job").status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn duplicate_bid_renders_the_literal_text() {
        let response = ApiError::DuplicateBid.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let content_type = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/plain"));
    }
}
