mod common;

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};

use chain_balance::api::{self, state::AppState};
use chain_balance::balance::BalanceService;
use chain_balance::chains::ChainKey;

const ADDRESS: &str = "0x4838b106fce9647bdf1e7877bf73ce8b0bad5f97";

async fn spawn_app(state: AppState) -> String {
    let app = api::router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn post_balance(base: &str, body: Value) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(format!("{base}/api/balance"))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

// ── Failure envelopes ────────────────────────────────────────────────

#[tokio::test]
async fn missing_parameters_get_400() {
    let base = spawn_app(AppState::new()).await;

    for body in [json!({}), json!({ "address": "", "chain": "" })] {
        let (status, body) = post_balance(&base, body).await;
        assert_eq!(status, 400);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"]["code"], "MISSING_PARAMETERS");
        assert_eq!(body["error"]["message"], "Adresse et chaîne sont requis");
    }
}

#[tokio::test]
async fn invalid_address_gets_400() {
    let base = spawn_app(AppState::new()).await;
    let (status, body) =
        post_balance(&base, json!({ "address": "not-an-address", "chain": "ethereum" })).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "INVALID_ADDRESS");
}

#[tokio::test]
async fn unsupported_chain_gets_400_with_the_chain_named() {
    let base = spawn_app(AppState::new()).await;
    let (status, body) =
        post_balance(&base, json!({ "address": ADDRESS, "chain": "polygon" })).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "UNSUPPORTED_CHAIN");
    assert_eq!(body["error"]["message"], "Chaîne non supportée: polygon");
}

#[tokio::test]
async fn downstream_timeout_gets_500_fetch_error() {
    let rpc = common::spawn_hanging_server().await;
    let service = BalanceService::with_timeout(Duration::from_millis(200));
    service
        .clients()
        .put(ChainKey::Ethereum, common::provider_for(&rpc));
    let base = spawn_app(AppState {
        service: Arc::new(service),
    })
    .await;

    let (status, body) =
        post_balance(&base, json!({ "address": ADDRESS, "chain": "ethereum" })).await;
    assert_eq!(status, 500);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"]["code"], "FETCH_ERROR");
    assert!(
        body["error"]["message"]
            .as_str()
            .unwrap()
            .to_lowercase()
            .contains("timeout")
    );
}

#[tokio::test]
async fn unreadable_body_gets_500_internal_error() {
    let base = spawn_app(AppState::new()).await;
    let response = reqwest::Client::new()
        .post(format!("{base}/api/balance"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
}

// ── Success envelope ─────────────────────────────────────────────────

#[tokio::test]
async fn successful_lookup_returns_the_full_envelope() {
    // 1.5 × 10^18 wei.
    let rpc = common::spawn_rpc_mock("0x14d1120d7b160000").await;
    let service = BalanceService::new();
    service
        .clients()
        .put(ChainKey::Mode, common::provider_for(&rpc));
    let base = spawn_app(AppState {
        service: Arc::new(service),
    })
    .await;

    let (status, body) = post_balance(&base, json!({ "address": ADDRESS, "chain": "mode" })).await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], json!(true));

    let data = &body["data"];
    assert_eq!(data["address"], ADDRESS);
    assert_eq!(data["chain"], "mode");
    assert_eq!(data["chainName"], "Mode Mainnet");
    assert_eq!(data["balance"], "1500000000000000000");
    assert_eq!(data["balanceFormatted"], "1.5");
    assert_eq!(data["symbol"], "ETH");
    assert_eq!(data["explorer"], "https://explorer.mode.network");
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn health_endpoint_answers_ok() {
    let base = spawn_app(AppState::new()).await;
    let response = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "ok");
}
