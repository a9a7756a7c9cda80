//! HTTP API tests driven through the router with `oneshot`

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use ledger_gateway::gateway::{create_router, state::AppState};
use ledger_gateway::{Fault, LedgerStore, MemoryLedger};

fn app() -> (Router, MemoryLedger) {
    let ledger = MemoryLedger::new();
    let store: Arc<dyn LedgerStore> = Arc::new(ledger.clone());
    (create_router(Arc::new(AppState::new(store))), ledger)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn open(app: &Router, id: i64, balance: &str) {
    let (status, _) = send(
        app,
        "POST",
        "/accounts",
        Some(json!({"account_id": id, "initial_balance": balance})),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

// ============================================================================
// Accounts
// ============================================================================

#[tokio::test]
async fn test_create_then_get_account() {
    let (app, _) = app();
    open(&app, 1, "100.00").await;

    let (status, body) = send(&app, "GET", "/accounts/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"account_id": 1, "current_balance": "100.00"}));
}

#[tokio::test]
async fn test_create_account_missing_field() {
    let (app, _) = app();
    let (status, body) = send(&app, "POST", "/accounts", Some(json!({"initial_balance": "1"}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_JSON");
}

#[tokio::test]
async fn test_create_account_bad_balance() {
    let (app, _) = app();
    let (status, body) = send(
        &app,
        "POST",
        "/accounts",
        Some(json!({"account_id": 1, "initial_balance": "lots"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_BALANCE");
}

#[tokio::test]
async fn test_create_duplicate_account_is_store_error() {
    let (app, _) = app();
    open(&app, 1, "10").await;

    let (status, body) = send(
        &app,
        "POST",
        "/accounts",
        Some(json!({"account_id": 1, "initial_balance": "99"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "STORE_ERROR");

    let (_, body) = send(&app, "GET", "/accounts/1", None).await;
    assert_eq!(body["current_balance"], "10");
}

#[tokio::test]
async fn test_get_missing_account() {
    let (app, _) = app();
    let (status, body) = send(&app, "GET", "/accounts/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "ACCOUNT_NOT_FOUND");
}

#[tokio::test]
async fn test_get_non_numeric_account() {
    let (app, _) = app();
    let (status, body) = send(&app, "GET", "/accounts/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_ACCOUNT_ID");
}

// ============================================================================
// Transfers
// ============================================================================

#[tokio::test]
async fn test_transfer_returns_balances() {
    let (app, _) = app();
    open(&app, 1, "100.00").await;
    open(&app, 2, "50.00").await;

    let (status, body) = send(
        &app,
        "POST",
        "/transactions",
        Some(json!({"source_account_id": 1, "destination_account_id": 2, "amount": "20.00"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "source_account_id": 1,
            "source_balance": "80.00",
            "destination_account_id": 2,
            "destination_balance": "70.00"
        })
    );

    let (_, body) = send(&app, "GET", "/accounts/2", None).await;
    assert_eq!(body["current_balance"], "70.00");
}

#[tokio::test]
async fn test_transfer_insufficient_funds() {
    let (app, ledger) = app();
    open(&app, 1, "10.00").await;
    open(&app, 2, "50.00").await;

    let (status, body) = send(
        &app,
        "POST",
        "/transactions",
        Some(json!({"source_account_id": 1, "destination_account_id": 2, "amount": "20.00"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INSUFFICIENT_FUNDS");
    assert_eq!(ledger.transactions_begun(), 0);
}

#[tokio::test]
async fn test_transfer_error_codes() {
    let (app, _) = app();
    open(&app, 1, "100").await;
    open(&app, 2, "0").await;

    let cases = [
        (json!({"source_account_id": 999, "destination_account_id": 1, "amount": "10"}), StatusCode::NOT_FOUND, "SOURCE_NOT_FOUND"),
        (json!({"source_account_id": 1, "destination_account_id": 999, "amount": "10"}), StatusCode::NOT_FOUND, "DESTINATION_NOT_FOUND"),
        (json!({"source_account_id": 1, "destination_account_id": 1, "amount": "10"}), StatusCode::BAD_REQUEST, "SAME_ACCOUNT"),
        (json!({"source_account_id": 1, "destination_account_id": 2, "amount": "0"}), StatusCode::BAD_REQUEST, "INVALID_AMOUNT"),
        (json!({"source_account_id": 1, "destination_account_id": 2, "amount": "1e2"}), StatusCode::BAD_REQUEST, "INVALID_AMOUNT"),
        (json!({"source_account_id": 1, "destination_account_id": 2}), StatusCode::BAD_REQUEST, "INVALID_JSON"),
    ];

    for (request, expected_status, expected_code) in cases {
        let (status, body) = send(&app, "POST", "/transactions", Some(request.clone())).await;
        assert_eq!(status, expected_status, "request {request}");
        assert_eq!(body["code"], expected_code, "request {request}");
    }

    let (_, body) = send(&app, "GET", "/accounts/1", None).await;
    assert_eq!(body["current_balance"], "100");
}

#[tokio::test]
async fn test_transfer_commit_failure_is_500() {
    let (app, ledger) = app();
    open(&app, 1, "100.00").await;
    open(&app, 2, "50.00").await;
    ledger.inject(Fault::Commit);

    let (status, body) = send(
        &app,
        "POST",
        "/transactions",
        Some(json!({"source_account_id": 1, "destination_account_id": 2, "amount": "20.00"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "STORE_ERROR");

    ledger.clear_faults();
    let (_, body) = send(&app, "GET", "/accounts/1", None).await;
    assert_eq!(body["current_balance"], "100.00");
}

#[tokio::test]
async fn test_transfer_missing_content_type() {
    let (app, _) = app();
    let request = Request::builder()
        .method("POST")
        .uri("/transactions")
        .body(Body::from(r#"{"source_account_id":1,"destination_account_id":2,"amount":"1"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// System
// ============================================================================

#[tokio::test]
async fn test_health() {
    let (app, _) = app();
    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"], "memory");
    assert!(!body["version"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_health_store_unreachable() {
    let (app, ledger) = app();
    ledger.inject(Fault::Begin);

    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unavailable");
    assert_eq!(body["store"], "memory");
}

#[tokio::test]
async fn test_wrong_method_on_known_route() {
    let (app, ledger) = app();
    open(&app, 1, "100").await;

    for (method, uri) in [
        ("GET", "/transactions"),
        ("DELETE", "/accounts/1"),
        ("PUT", "/accounts/1"),
        ("GET", "/accounts"),
    ] {
        let (status, _) = send(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method} {uri}");
    }

    assert_eq!(ledger.transactions_begun(), 0);
    let (_, body) = send(&app, "GET", "/accounts/1", None).await;
    assert_eq!(body["current_balance"], "100");
}

#[tokio::test]
async fn test_openapi_lists_routes() {
    let (app, _) = app();
    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    let paths = body["paths"].as_object().unwrap();
    for path in ["/accounts", "/accounts/{account_id}", "/transactions", "/health"] {
        assert!(paths.contains_key(path), "missing {path}");
    }
}
