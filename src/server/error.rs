use crate::domain::model::ErrorBody;
use crate::utils::error::AppError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Errors surfaced to HTTP callers. Every variant renders as `{"detail": ...}`.
#[derive(Debug)]
pub enum ApiError {
    /// Body missing, not JSON, or `text` absent / not a string.
    InvalidRequest(JsonRejection),
    NotFound,
    Internal(AppError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection)
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        ApiError::Internal(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::InvalidRequest(rejection) => {
                tracing::warn!("Rejected request: {}", rejection.body_text());
                (rejection.status(), rejection.body_text())
            }
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
            ApiError::Internal(error) => {
                // 原因只寫進日誌，不回傳給呼叫端
                tracing::error!(
                    "❌ Request failed: {} (Category: {:?})",
                    error,
                    error.category()
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}
