//! Health check handler

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::super::state::AppState;

/// Health check response data
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// "ok" or "unavailable"
    #[schema(example = "ok")]
    pub status: String,
    /// Ledger backend in use
    #[schema(example = "postgres")]
    pub store: String,
    /// Build revision
    #[schema(example = "1a2b3c4")]
    pub version: String,
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_u64)]
    pub timestamp_ms: u64,
}

/// Health check endpoint
///
/// - Healthy: 200 OK
/// - Ledger unreachable: 503 Service Unavailable
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse),
        (status = 503, description = "Ledger unreachable", body = HealthResponse)
    ),
    tag = "System"
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<HealthResponse>) {
    let timestamp_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let (status, label) = match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(e) => {
            tracing::error!("[HEALTH] {} ledger ping failed: {}", state.store.name(), e);
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    (
        status,
        Json(HealthResponse {
            status: label.to_string(),
            store: state.store.name().to_string(),
            version: env!("GIT_HASH").to_string(),
            timestamp_ms,
        }),
    )
}
