//! `Json` with the rejection reported through `AppError`, so malformed
//! bodies get the same `{ "message": ... }` shape as every other failure.
//!
//! A request without a body deserializes as `T::default()`: every request
//! DTO makes its fields optional, and an absent body reads as "no fields".
use axum::{
    Json,
    body::HttpBody,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    T: Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.body().size_hint().exact() == Some(0) {
            return Ok(Self(T::default()));
        }

        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(reject)?;
        Ok(Self(value))
    }
}

fn reject(rejection: JsonRejection) -> AppError {
    tracing::debug!(%rejection, "rejected request body");
    match rejection {
        JsonRejection::BytesRejection(ref r) if r.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            AppError::PayloadTooLarge
        }
        _ => AppError::validation(rejection.body_text()),
    }
}
