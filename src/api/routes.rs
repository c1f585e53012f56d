/*
 * Responsibility
 * - URL structure of the API
 * - /health and /posts, /posts/{id}
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::handlers::{
    health::health,
    posts::{create_post, delete_post, get_post, list_posts, update_post},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/{id}",
            get(get_post).patch(update_post).delete(delete_post),
        )
}
