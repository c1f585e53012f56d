/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 * - BackendClient is cheap to clone (reqwest::Client is an Arc inside)
 */
use crate::services::backend::BackendClient;

#[derive(Clone, Debug)]
pub struct AppState {
    pub backend: BackendClient,
}

impl AppState {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }
}
