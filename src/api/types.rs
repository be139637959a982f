use serde::{Deserialize, Serialize};

use crate::balance::BalanceResult;

// ── Request types ────────────────────────────────────────────────────

/// Body of `POST /api/balance`. Absent fields become empty strings and
/// fail validation as missing parameters.
#[derive(Debug, Deserialize)]
pub struct BalanceRequestBody {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub chain: String,
}

// ── Response types ───────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: String,
}

/// The fixed response envelope: `success` plus either `data` or
/// `error`, never both.
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<BalanceResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl BalanceResponse {
    pub fn ok(data: BalanceResult) -> Self {
        BalanceResponse {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>, code: impl Into<String>) -> Self {
        BalanceResponse {
            success: false,
            data: None,
            error: Some(ErrorBody {
                message: message.into(),
                code: code.into(),
            }),
        }
    }
}
