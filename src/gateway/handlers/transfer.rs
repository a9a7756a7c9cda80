//! Transfer handler

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use super::super::state::AppState;
use super::super::types::{ApiResult, TransferRequestBody, TransferResponse};

/// Transfer funds between two accounts
///
/// POST /transactions
///
/// Either both balances move or neither does. The response carries the
/// balances as re-read from the ledger after commit.
#[utoipa::path(
    post,
    path = "/transactions",
    request_body = TransferRequestBody,
    responses(
        (status = 200, description = "Transfer committed", body = TransferResponse),
        (status = 400, description = "Invalid JSON, amount, or same account", body = crate::gateway::types::ErrorResponse),
        (status = 404, description = "Source or destination account not found", body = crate::gateway::types::ErrorResponse),
        (status = 409, description = "Account disappeared during the transfer", body = crate::gateway::types::ErrorResponse),
        (status = 422, description = "Insufficient funds", body = crate::gateway::types::ErrorResponse),
        (status = 500, description = "Store error; nothing was applied", body = crate::gateway::types::ErrorResponse)
    ),
    tag = "Transfer"
)]
pub async fn create_transfer(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TransferRequestBody>, JsonRejection>,
) -> ApiResult<Json<TransferResponse>> {
    let Json(req) = payload?;

    let receipt = state
        .transfers
        .execute(
            req.source_account_id,
            req.destination_account_id,
            &req.amount,
        )
        .await?;

    Ok(Json(receipt.into()))
}
