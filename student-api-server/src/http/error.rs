//! API error types with IntoResponse
//!
//! Every handler failure becomes exactly one error envelope with the
//! matching status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::envelope::error_response;
use crate::db::StoreError;
use crate::models::{PaginationError, ValidationErrors};

/// API error type with automatic HTTP status mapping
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or missing request data (400)
    #[error("{0}")]
    InvalidInput(String),

    /// Payload failed field rules (400)
    #[error("{0}")]
    Validation(ValidationErrors),

    /// No record for the given id (404)
    #[error("{0}")]
    NotFound(String),

    /// Store failure (500, logged)
    #[error("{0}")]
    Store(StoreError),

    /// Dependency unavailable (503)
    #[error("{0}")]
    Unavailable(String),
}

impl ApiError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Store(e) => {
                // Log the actual error, return generic message
                tracing::error!(error = %e, "database error");
                error_response(status, "an internal error occurred")
            }
            Self::Unavailable(message) => {
                tracing::error!(%message, "service unavailable");
                error_response(status, message)
            }
            _ => {
                let message = self.to_string();
                tracing::warn!(status = status.as_u16(), %message, "request rejected");
                error_response(status, &message)
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(e: ValidationErrors) -> Self {
        Self::Validation(e)
    }
}

impl From<PaginationError> for ApiError {
    fn from(e: PaginationError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { .. } => Self::NotFound(e.to_string()),
            _ => Self::Store(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rule;
    use axum::body::to_bytes;

    async fn message(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "Error");
        body["message"].as_str().unwrap().to_owned()
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let mut errors = ValidationErrors::new();
        errors.push("Name", Rule::Required);
        errors.push("Email", Rule::Email);

        let response = ApiError::from(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            message(response).await,
            "Name is required, Email must be a valid email"
        );
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = ApiError::from(StoreError::NotFound { id: 3 }).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(message(response).await, "student with ID 3 not found");
    }

    #[tokio::test]
    async fn store_error_is_500_and_generic() {
        let err = ApiError::from(StoreError::Database(sqlx::Error::PoolTimedOut));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message(response).await, "an internal error occurred");
    }

    #[tokio::test]
    async fn pagination_error_is_400() {
        let response = ApiError::from(PaginationError::InvalidOffset).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(message(response).await, "invalid offset value");
    }

    #[tokio::test]
    async fn unavailable_is_503() {
        let response = ApiError::Unavailable("database unavailable".into()).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
