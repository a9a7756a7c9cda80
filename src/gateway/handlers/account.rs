//! Account handlers (creation, balance lookup)

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use super::super::state::AppState;
use super::super::types::{AccountResponse, ApiError, ApiResult, CreateAccountRequest};

/// Create an account with an opening balance
///
/// POST /accounts
#[utoipa::path(
    post,
    path = "/accounts",
    request_body = CreateAccountRequest,
    responses(
        (status = 204, description = "Account created"),
        (status = 400, description = "Invalid JSON or initial_balance", body = crate::gateway::types::ErrorResponse),
        (status = 500, description = "Store error (including duplicate account_id)", body = crate::gateway::types::ErrorResponse)
    ),
    tag = "Account"
)]
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(req) = payload?;

    state
        .accounts
        .create(req.account_id, &req.initial_balance)
        .await
        .inspect_err(|e| tracing::warn!(account_id = req.account_id, "create account failed: {}", e))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get an account's current balance
///
/// GET /accounts/{account_id}
#[utoipa::path(
    get,
    path = "/accounts/{account_id}",
    params(
        ("account_id" = i64, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Account balance", body = AccountResponse),
        (status = 400, description = "Non-numeric account ID", body = crate::gateway::types::ErrorResponse),
        (status = 404, description = "Account not found", body = crate::gateway::types::ErrorResponse),
        (status = 500, description = "Store error", body = crate::gateway::types::ErrorResponse)
    ),
    tag = "Account"
)]
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Path(account_id): Path<String>,
) -> ApiResult<Json<AccountResponse>> {
    let account_id: i64 = account_id
        .parse()
        .map_err(|_| ApiError::bad_request("INVALID_ACCOUNT_ID", "Invalid account ID"))?;

    let account = state.accounts.get(account_id).await?;
    Ok(Json(account.into()))
}
