//! Gateway request/response types
//!
//! Monetary values cross the API as JSON strings to preserve precision.
//! Errors are returned as `{"code": "...", "msg": "..."}` with the HTTP
//! status taken from the domain error.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::account::{Account, AccountError};
use crate::transfer::{TransferError, TransferReceipt};

// ============================================================================
// Request DTOs
// ============================================================================

/// POST /accounts body
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAccountRequest {
    #[schema(example = 1)]
    pub account_id: i64,
    /// Opening balance as a decimal string
    #[schema(example = "100.00")]
    pub initial_balance: String,
}

/// POST /transactions body
#[derive(Debug, Deserialize, ToSchema)]
pub struct TransferRequestBody {
    #[schema(example = 1)]
    pub source_account_id: i64,
    #[schema(example = 2)]
    pub destination_account_id: i64,
    /// Strictly positive decimal string
    #[schema(example = "20.00")]
    pub amount: String,
}

// ============================================================================
// Response DTOs
// ============================================================================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AccountResponse {
    #[schema(example = 1)]
    pub account_id: i64,
    #[schema(example = "80.00")]
    pub current_balance: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            account_id: account.id,
            current_balance: account.balance.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TransferResponse {
    #[schema(example = 1)]
    pub source_account_id: i64,
    #[schema(example = "80.00")]
    pub source_balance: String,
    #[schema(example = 2)]
    pub destination_account_id: i64,
    #[schema(example = "70.00")]
    pub destination_balance: String,
}

impl From<TransferReceipt> for TransferResponse {
    fn from(receipt: TransferReceipt) -> Self {
        Self {
            source_account_id: receipt.source_account_id,
            source_balance: receipt.source_balance.to_string(),
            destination_account_id: receipt.destination_account_id,
            destination_balance: receipt.destination_balance.to_string(),
        }
    }
}

/// Error body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "INSUFFICIENT_FUNDS")]
    pub code: String,
    #[schema(example = "Insufficient funds: available 10.00, requested 20.00")]
    pub msg: String,
}

// ============================================================================
// ApiError
// ============================================================================

/// Handler error, rendered as status + [`ErrorResponse`].
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub msg: String,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, msg: impl Into<String>) -> Self {
        Self {
            status,
            code,
            msg: msg.into(),
        }
    }

    pub fn bad_request(code: &'static str, msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, code, msg)
    }

    fn from_parts(status: u16, code: &'static str, msg: String) -> Self {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self::new(status, code, msg)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            code: self.code.to_string(),
            msg: self.msg,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<TransferError> for ApiError {
    fn from(e: TransferError) -> Self {
        Self::from_parts(e.http_status(), e.code(), e.to_string())
    }
}

impl From<AccountError> for ApiError {
    fn from(e: AccountError) -> Self {
        Self::from_parts(e.http_status(), e.code(), e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request("INVALID_JSON", rejection.body_text())
    }
}
