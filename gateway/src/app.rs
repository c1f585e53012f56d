/*
 * Responsibility
 * - Load Config → build the backend client → assemble the Router
 * - Static files under /static, security headers, request id / trace
 * - Start with axum::serve()
 */
use std::path::Path;
use std::{panic, process};

use anyhow::Result;
use axum::Router;
use tower_http::services::ServeDir;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{api, config::Config, middleware, services::backend::BackendClient, state::AppState};

fn init_tracing() {
    // RUST_LOG=info,blog_gateway=debug,tower_http=debug cargo run -p blog-gateway
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;
    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting gateway in {:?} mode on {} (backend: {})",
        config.app_env,
        config.addr,
        config.api_url,
    );

    let state = AppState::new(BackendClient::new(config.api_url.clone()));
    let app = build_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    let router = Router::new()
        .merge(api::routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state);

    let router = middleware::http::apply(router);
    middleware::security_headers::apply(router)
}
