//! Thin HTTP layer over the stores and the transfer engine.

pub mod handlers;
pub mod state;
pub mod types;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;

use crate::config::GatewayConfig;
use state::AppState;

/// Build the gateway router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/users", post(handlers::users::create_user))
        .route("/users/{user_id}", get(handlers::users::fetch_user))
        .route("/accounts", post(handlers::accounts::create_account))
        .route(
            "/accounts/{account_id}",
            get(handlers::accounts::fetch_account),
        )
        .route("/transfers", post(handlers::transfers::create_transfer))
        .route("/health", get(handlers::health::health))
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: &GatewayConfig, state: Arc<AppState>) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("gateway listening on {}", addr);

    axum::serve(listener, router(state)).await?;
    Ok(())
}
