/*
 * Responsibility
 * - One handler per browser route; each makes exactly one backend call
 * - Success: render a page, or redirect to / after a mutation
 * - Failure: GatewayError with the page's default message
 */
use axum::{
    Form, Json,
    extract::{Path, State},
    response::{Html, Redirect},
};
use serde_json::{Value, json};

use crate::{
    error::GatewayError, services::backend::PostForm, state::AppState, views,
};

pub async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, GatewayError> {
    let posts = state
        .backend
        .list_posts()
        .await
        .map_err(|e| GatewayError::from_backend(e, "Error fetching posts"))?;

    Ok(Html(views::index_page(&posts)))
}

pub async fn new_form() -> Html<String> {
    Html(views::edit_page(None, "New Post", "Create Post"))
}

pub async fn create_post(
    State(state): State<AppState>,
    Form(form): Form<PostForm>,
) -> Result<Redirect, GatewayError> {
    state
        .backend
        .create_post(&form)
        .await
        .map_err(|e| GatewayError::from_backend(e, "Error creating new post"))?;
    tracing::info!("post created");

    Ok(Redirect::to("/"))
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, GatewayError> {
    let post = state
        .backend
        .get_post(&id)
        .await
        .map_err(|e| GatewayError::from_backend(e, "Error fetching post"))?;

    Ok(Html(views::edit_page(Some(&post), "Edit Post", "Update Post")))
}

pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<PostForm>,
) -> Result<Redirect, GatewayError> {
    state
        .backend
        .update_post(&id, &form)
        .await
        .map_err(|e| GatewayError::from_backend(e, "Error updating post"))?;

    Ok(Redirect::to("/"))
}

pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, GatewayError> {
    state
        .backend
        .delete_post(&id)
        .await
        .map_err(|e| GatewayError::from_backend(e, "Error deleting post"))?;
    tracing::info!(%id, "post deleted");

    Ok(Redirect::to("/"))
}
