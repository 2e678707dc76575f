// src/api/error.rs
// Centralized error handling for HTTP API responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;
use tracing::error;

use crate::error::FunError;

/// Standard API error response format
#[derive(Debug)]
pub struct ApiError {
    pub message: String,
    pub status_code: StatusCode,
    pub error_code: Option<String>,
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            error_code: Some("INTERNAL_ERROR".to_string()),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::BAD_REQUEST,
            error_code: Some("BAD_REQUEST".to_string()),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::NOT_FOUND,
            error_code: Some("NOT_FOUND".to_string()),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::CONFLICT,
            error_code: Some("CONFLICT".to_string()),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<FunError> for ApiError {
    fn from(err: FunError) -> Self {
        match err {
            FunError::InvalidInput(msg) => ApiError::bad_request(msg),
            FunError::NotFound(what) => ApiError::not_found(format!("{what} not found")),
            FunError::Busy(what) => ApiError::conflict(format!("{what} is busy")),
            other => {
                error!("Request failed: {:?}", other);
                ApiError::internal(other.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response_json = json!({
            "error": true,
            "message": self.message,
            "status": self.status_code.as_u16()
        });

        if let Some(error_code) = self.error_code {
            response_json["error_code"] = json!(error_code);
        }

        (self.status_code, Json(response_json)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fun_error_mapping() {
        let err: ApiError = FunError::InvalidInput("too long".into()).into();
        assert_eq!(err.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "too long");

        let err: ApiError = FunError::Busy("wheel").into();
        assert_eq!(err.status_code, StatusCode::CONFLICT);

        let err: ApiError = FunError::NotFound("comment 42".into()).into();
        assert_eq!(err.status_code, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "comment 42 not found");

        let json_err = serde_json::from_str::<u8>("x").unwrap_err();
        let err: ApiError = FunError::Json(json_err).into();
        assert_eq!(err.status_code, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
