/*
 * Responsibility
 * - Take the `{id}` path segment and resolve it into the active store's PostId
 * - A segment the store cannot parse is rejected as InvalidIdentifier (400)
 */
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::AppError;
use crate::repos::PostId;
use crate::state::AppState;

#[derive(Debug, Clone, Copy)]
pub struct PostIdParam(pub PostId);

impl FromRequestParts<AppState> for PostIdParam {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::InvalidIdentifier)?;
        let id = state.posts.parse_id(&raw)?;
        Ok(Self(id))
    }
}
