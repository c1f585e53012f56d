/*
 * Responsibility
 * - GatewayError: what the browser sees when the backend call fails
 * - Status: the backend's when it answered, otherwise 404
 * - Message: the backend's `message` when present, otherwise the page's default
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::backend::BackendError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{message}")]
    Backend { status: StatusCode, message: String },
    #[error("{message}")]
    NoResponse { message: String },
}

impl GatewayError {
    /// Map a failed backend call, falling back to `default_message`.
    pub fn from_backend(err: BackendError, default_message: &str) -> Self {
        match err {
            BackendError::Status { status, message } => GatewayError::Backend {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::NOT_FOUND),
                message: message.unwrap_or_else(|| default_message.to_string()),
            },
            other => {
                tracing::warn!(error = %other, "no usable backend response");
                GatewayError::NoResponse {
                    message: default_message.to_string(),
                }
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::Backend { status, .. } => *status,
            GatewayError::NoResponse { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_status_and_message_are_kept() {
        let err = GatewayError::from_backend(
            BackendError::Status {
                status: 400,
                message: Some("Invalid post ID.".into()),
            },
            "Error fetching post",
        );
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Invalid post ID.");
    }

    #[test]
    fn missing_message_falls_back_to_default() {
        let err = GatewayError::from_backend(
            BackendError::Status {
                status: 500,
                message: None,
            },
            "Error updating post",
        );
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Error updating post");
    }

    #[test]
    fn no_response_defaults_to_not_found() {
        let err = GatewayError::from_backend(BackendError::BaseUrl, "Error fetching posts");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Error fetching posts");
    }
}
