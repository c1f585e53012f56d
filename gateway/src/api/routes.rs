/*
 * Responsibility
 * - URL structure of the gateway
 * - Each page maps to exactly one backend call
 */
use axum::{Router, routing::get};

use crate::api::pages::{
    create_post, delete_post, edit_form, health, index, new_form, update_post,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/new", get(new_form).post(create_post))
        .route("/edit/{id}", get(edit_form).post(update_post))
        .route("/delete/{id}", get(delete_post))
}
