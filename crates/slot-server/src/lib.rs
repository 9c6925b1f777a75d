//! # slot-server
//!
//! HTTP surface over [`slot_engine`]: save busy slots, ask for common free
//! slots, read a user's calendar and book a slot for the whole group.
//!
//! ## Routes
//!
//! - `POST /slots` — replace busy slots for the listed users
//! - `GET /suggest?duration=N` — up to three common free slots of `N` minutes
//! - `GET /calendar/{user_id}` — a user's busy slots plus group bookings
//! - `POST /book?duration=N` — book a slot of exactly `N` minutes
//! - `GET /health` — liveness probe

pub mod config;
pub mod logging;
pub mod routes;
pub mod state;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub use config::ServerConfig;
pub use state::AppState;

/// Build the application router over `state`.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::slots::router())
        .merge(routes::booking::router())
        .merge(routes::health::router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Bind to the configured address and serve until the process is stopped.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let state = AppState::new(config.window);
    let addr = config.socket_addr();

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(%addr, window = ?config.window, "slot-server listening");

    axum::serve(listener, app(state))
        .await
        .context("Server error")?;

    Ok(())
}
