//! Tunefeed Server
//!
//! HTTP API serving an in-memory album catalog and tweets stored in
//! Cassandra.

mod config;
mod error;
mod handlers;
mod services;
mod storage;

use anyhow::{Context, Result};
use axum::{middleware, routing::get, Router};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::AppConfig;
use services::{AlbumCatalog, TweetService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub albums: Arc<AlbumCatalog>,
    pub tweets: Arc<TweetService>,
    pub started_at: DateTime<Utc>,
}

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[FATAL] Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_tracing(&config.log.filter) {
        eprintln!("[FATAL] Failed to initialize logging: {:#}", e);
        std::process::exit(1);
    }

    info!("Starting Tunefeed Server v{}", env!("CARGO_PKG_VERSION"));
    info!("PID: {}", std::process::id());

    if let Err(e) = run_server(config).await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

/// `RUST_LOG` takes precedence over the configured filter
fn init_tracing(default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .with_context(|| format!("Invalid log filter: {}", default_filter))?;

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set global subscriber")?;

    Ok(())
}

async fn run_server(config: AppConfig) -> Result<()> {
    let addr = config.bind_addr()?;
    info!(
        "Config loaded: bind={}, storage={:?}",
        addr, config.storage.backend
    );

    info!("Opening tweet store...");
    let tweet_store = storage::open_tweet_store(&config)
        .await
        .context("Failed to open tweet store")?;

    let state = AppState {
        albums: Arc::new(AlbumCatalog::seeded()),
        tweets: Arc::new(TweetService::new(tweet_store)),
        started_at: Utc::now(),
    };
    info!("Services initialized");

    let app = build_router(state, config.request_timeout());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/albums",
            get(handlers::albums::list).post(handlers::albums::create),
        )
        .route("/albums/:id", get(handlers::albums::get))
        .route(
            "/tweets",
            get(handlers::tweets::list).post(handlers::tweets::create),
        )
        .route("/tweets/:timeline", get(handlers::tweets::get))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(middleware::map_response(error::timeout_body))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
