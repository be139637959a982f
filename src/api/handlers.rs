use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::api::types::{BalanceRequestBody, BalanceResponse};

/// `POST /api/balance` — validate, look up, wrap in the envelope.
pub async fn balance(
    State(state): State<AppState>,
    payload: Result<Json<BalanceRequestBody>, JsonRejection>,
) -> Response {
    let Json(body) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::error!(%rejection, "unreadable balance request body");
            return ApiError::internal().into_response();
        }
    };

    match state.service.get_balance(&body.address, &body.chain).await {
        Ok(result) => Json(BalanceResponse::ok(result)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, address = %body.address, chain = %body.chain,
                "balance lookup failed");
            ApiError::from(err).into_response()
        }
    }
}

pub async fn health() -> &'static str {
    "ok"
}
