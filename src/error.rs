use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Maps store failures to HTTP status codes and formats them as JSON
/// `{"error": "..."}` bodies.
#[derive(Debug)]
pub enum ApiError {
    /// Stored document exists but cannot be parsed
    CorruptStore(StoreError),
    /// Reading or writing the document file failed
    StorageError(StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::CorruptStore(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Corrupt store: {}", err),
            ),
            ApiError::StorageError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Storage error: {}", err),
            ),
        };

        tracing::error!("{}", error_message);

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Corrupt { .. } => ApiError::CorruptStore(err),
            other => ApiError::StorageError(other),
        }
    }
}
