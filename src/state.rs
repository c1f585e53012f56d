/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 * - Cheap to clone (Arc inside)
 */
use std::sync::Arc;

use crate::services::PostService;

#[derive(Clone, Debug)]
pub struct AppState {
    pub posts: Arc<PostService>,
}

impl AppState {
    pub fn new(posts: Arc<PostService>) -> Self {
        Self { posts }
    }
}
