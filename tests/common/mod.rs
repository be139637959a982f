//! Local stand-ins for a chain RPC node, so the suite runs offline.
#![allow(dead_code)]

use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::io::AsyncReadExt;
use tokio::net::TcpListener;

/// JSON-RPC endpoint that answers every call with `result_hex`,
/// echoing the request id. Returns the endpoint URL.
pub async fn spawn_rpc_mock(result_hex: &'static str) -> String {
    let app = Router::new().route(
        "/",
        post(move |Json(request): Json<Value>| async move {
            let id = request.get("id").cloned().unwrap_or(json!(1));
            Json(json!({ "jsonrpc": "2.0", "id": id, "result": result_hex }))
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/")
}

/// JSON-RPC endpoint that rejects every call with the given error.
pub async fn spawn_rpc_error_mock(code: i64, message: &'static str) -> String {
    let app = Router::new().route(
        "/",
        post(move |Json(request): Json<Value>| async move {
            let id = request.get("id").cloned().unwrap_or(json!(1));
            Json(json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": { "code": code, "message": message },
            }))
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/")
}

/// Endpoint that accepts connections, reads forever and never replies.
/// A request against it only ends when the caller's timer fires.
pub async fn spawn_hanging_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(async move {
                let mut buf = [0u8; 1024];
                while let Ok(n) = socket.read(&mut buf).await {
                    if n == 0 {
                        break;
                    }
                }
            });
        }
    });
    format!("http://{addr}/")
}

pub fn provider_for(url: &str) -> DynProvider {
    ProviderBuilder::new()
        .connect_http(url.parse().unwrap())
        .erased()
}
