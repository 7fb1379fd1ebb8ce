use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::MessageBody;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Every handler failure. The body is always `{"message": ...}`.
///
/// A missing record is reported like any other store failure (500).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid id")]
    InvalidId,
    #[error("invalid body")]
    InvalidBody,
    #[error("there was an error")]
    Internal(#[from] ServiceError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId | ApiError::InvalidBody => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(cause) = &self {
            error!(error = %cause, not_found = cause.is_not_found(), "request failed");
        }
        (self.status(), Json(MessageBody::new(self.to_string()))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("migration failed: {0}")]
    Migration(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses() {
        assert_eq!(ApiError::InvalidId.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidBody.status(), StatusCode::BAD_REQUEST);
        let internal = ApiError::from(ServiceError::not_found("cat"));
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.to_string(), "there was an error");
    }
}
