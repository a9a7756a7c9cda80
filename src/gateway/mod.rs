//! HTTP Gateway
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | POST | `/accounts` | [`handlers::create_account`] |
//! | GET | `/accounts/{account_id}` | [`handlers::get_account`] |
//! | POST | `/transactions` | [`handlers::create_transfer`] |
//! | GET | `/health` | [`handlers::health_check`] |
//! | GET | `/api-docs/openapi.json` | [`openapi::openapi_json`] |

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::ledger::LedgerStore;
use state::AppState;

/// Build the router over shared state
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/accounts", post(handlers::create_account))
        .route("/accounts/{account_id}", get(handlers::get_account))
        .route("/transactions", post(handlers::create_transfer))
        .route("/health", get(handlers::health_check))
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start HTTP Gateway server
pub async fn run_server(host: &str, port: u16, store: Arc<dyn LedgerStore>) -> std::io::Result<()> {
    let backend = store.name();
    let state = Arc::new(AppState::new(store));
    let app = create_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(%addr, backend, "Gateway listening");
    tracing::info!("OpenAPI document at http://{}/api-docs/openapi.json", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
