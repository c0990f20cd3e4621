//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::services::ServiceError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation, duplicate or bad query)
    BadRequest(String),
    /// Internal server error; the payload is logged, never returned
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            AppError::BadRequest(msg) => ApiError::new(msg),
            AppError::Internal(cause) => {
                tracing::error!("Request failed: {}", cause);
                ApiError::new(crate::services::error::STORAGE_MESSAGE)
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        if err.is_client_error() {
            AppError::BadRequest(err.public_message())
        } else {
            AppError::Internal(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::RepositoryError;

    #[test]
    fn test_client_errors_are_bad_request() {
        let err = AppError::from(ServiceError::MissingQuery);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(matches!(
            err,
            AppError::BadRequest(ref m) if m == "Latitude and Longitude are required."
        ));
    }

    #[test]
    fn test_every_client_error_is_bad_request() {
        let errors = [
            ServiceError::Validation("Latitude must be between -90 and 90.".to_string()),
            ServiceError::DuplicateCoordinate,
            ServiceError::MissingQuery,
            ServiceError::InvalidQuery,
        ];
        for err in errors {
            let message = err.public_message();
            match AppError::from(err) {
                AppError::BadRequest(m) => assert_eq!(m, message),
                other => panic!("expected bad request, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_internal_payload_keeps_cause() {
        let err = AppError::from(ServiceError::Storage(RepositoryError::connection("refused")));
        assert!(matches!(err, AppError::Internal(ref cause) if cause.contains("refused")));
    }

    #[test]
    fn test_storage_errors_are_internal() {
        let err = AppError::from(ServiceError::Storage(RepositoryError::query("boom")));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
