//! Mapping of domain errors onto HTTP status codes and response bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::JotterError;

/// HTTP-facing error: a status code plus the message rendered as
/// `{"error": "<message>"}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl From<JotterError> for ApiError {
    fn from(err: JotterError) -> Self {
        let status = match &err {
            JotterError::NoteNotFound(_) => StatusCode::NOT_FOUND,
            JotterError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            JotterError::CorruptDataFile { .. } | JotterError::Io(_) | JotterError::Json(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {}", err);
        }

        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        let err: ApiError = JotterError::NoteNotFound("abc".to_string()).into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert!(err.message.contains("abc"));

        let err: ApiError = JotterError::ValidationFailed {
            field: "title".to_string(),
            message: "must not be empty".to_string(),
        }
        .into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ApiError = JotterError::Io(io).into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
