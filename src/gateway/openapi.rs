//! OpenAPI Documentation
//!
//! Served at `GET /api-docs/openapi.json`.

use axum::Json;
use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{
    AccountResponse, CreateAccountRequest, ErrorResponse, TransferRequestBody, TransferResponse,
};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ledger Gateway API",
        version = "1.0.0",
        description = "Account creation, balance lookup and atomic balance transfers.",
        license(
            name = "MIT"
        )
    ),
    paths(
        crate::gateway::handlers::account::create_account,
        crate::gateway::handlers::account::get_account,
        crate::gateway::handlers::transfer::create_transfer,
        crate::gateway::handlers::health::health_check,
    ),
    components(
        schemas(
            CreateAccountRequest,
            AccountResponse,
            TransferRequestBody,
            TransferResponse,
            ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "Account", description = "Account creation and balance lookup"),
        (name = "Transfer", description = "Atomic balance transfers"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
