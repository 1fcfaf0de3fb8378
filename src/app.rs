/*
 * Responsibility
 * - tracing と panic hook の初期化
 * - Config → 依存 (token verifier, user store) → Router の組み立て
 * - Router 全体に掛ける middleware (request id / trace / limit / CORS / security headers)
 * - axum::serve() と graceful shutdown
 */
use std::{panic, process, sync::Arc};

use anyhow::{Context, Result};
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::middleware::{self, http::HttpLimits};
use crate::repos::{PgUserStore, UserStore};
use crate::services::auth::build_token_verifier;
use crate::state::AppState;
use crate::api;

fn init_tracing() {
    // RUST_LOG があれば優先。例: RUST_LOG=info,role_gate=debug,tower_http=debug
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
        // 起動方法によっては stderr が見えないことがある
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
        "starting API in {:?} mode on {}",
        config.app_env,
        config.addr
    );
    tracing::debug!(?config, "loaded configuration");

    let state = build_state(&config)?;
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn build_state(config: &Config) -> Result<AppState> {
    // lazy 接続: DB はこちらより後に上がることがある
    let db = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(config.user_lookup_timeout)
        .connect_lazy(&config.database_url)
        .context("invalid DATABASE_URL")?;

    let users: Arc<dyn UserStore> = Arc::new(PgUserStore::new(db));

    Ok(AppState::new(
        build_token_verifier(config),
        users,
        config.user_lookup_timeout,
        config.request_body_limit,
    ))
}

fn build_router(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .nest("/api/v1", api::v1::routes(state.clone()))
        .with_state(state);

    let router = middleware::security_headers::apply(router);
    let router = middleware::cors::apply(router, config.app_env, &config.cors_allowed_origins);
    middleware::http::apply(
        router,
        HttpLimits {
            timeout: config.request_timeout,
            body_limit: config.request_body_limit,
        },
    )
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
