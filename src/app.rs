/*
 * Responsibility
 * - Load Config → build the post store → assemble the Router
 * - Apply middleware (request id / trace / body limit / CORS)
 * - Start with axum::serve()
 */
use std::{panic, process, sync::Arc};

use anyhow::Result;
use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    api,
    config::{Config, StoreBackend},
    error::AppError,
    middleware,
    repos::{MemoryPostStore, PgPostStore, PostStore},
    services::PostService,
    state::AppState,
};

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,blog_api=debug,tower_http=debug cargo run
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
        // stderr can be hidden depending on how the process is launched.
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
        "starting API in {:?} mode on {} (store: {}, seed policy: {:?})",
        config.app_env,
        config.addr,
        config.store.name(),
        config.seed_policy,
    );

    let state = build_state(&config).await?;
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn build_state(config: &Config) -> Result<AppState> {
    let store: Arc<dyn PostStore> = match &config.store {
        StoreBackend::Memory => Arc::new(MemoryPostStore::new()),
        StoreBackend::Postgres {
            database_url,
            max_connections,
        } => Arc::new(PgPostStore::connect(database_url, *max_connections).await?),
    };

    let posts = PostService::new(store, config.seed_policy);
    Ok(AppState::new(Arc::new(posts)))
}

async fn fallback() -> AppError {
    AppError::UnknownRoute
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

pub fn build_router(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .merge(api::routes())
        .fallback(fallback)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state);

    let router = middleware::http::apply(router);
    middleware::cors::apply(router, config)
}
