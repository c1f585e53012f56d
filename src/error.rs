/*
 * Responsibility
 * - The API-wide AppError
 * - IntoResponse (HTTP status / JSON error body `{ "message": ... }`)
 * - Uniform conversion of RepoError into a 500
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::repos::error::RepoError;

pub const MISSING_FIELDS_MESSAGE: &str = "Title and content are required for a new post.";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("Invalid post ID.")]
    InvalidIdentifier,
    #[error("Can't find the post with this ID.")]
    NotFound,
    #[error("Route not found.")]
    UnknownRoute,
    #[error("Method not allowed.")]
    MethodNotAllowed,
    #[error("Request body too large.")]
    PayloadTooLarge,
    #[error("internal server error")]
    Internal,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidIdentifier => StatusCode::BAD_REQUEST,
            AppError::NotFound | AppError::UnknownRoute => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        // The client only ever sees a generic 500; keep the cause in the logs.
        tracing::error!(error = ?e, "post store failure");
        AppError::Internal
    }
}
