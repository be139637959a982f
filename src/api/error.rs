use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::balance::BalanceError;
use crate::validation::ValidationError;

use super::types::BalanceResponse;

/// HTTP rendition of a pipeline failure: status, stable code, message.
/// Serialized through the same envelope as success responses.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    /// Unreadable request body or anything else that never reached the
    /// pipeline.
    pub fn internal() -> Self {
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: "INTERNAL_ERROR",
            message: "Erreur interne du serveur".to_string(),
        }
    }
}

impl From<BalanceError> for ApiError {
    fn from(err: BalanceError) -> Self {
        match &err {
            BalanceError::Validation(v) => match v {
                ValidationError::AddressRequired | ValidationError::ChainRequired => ApiError {
                    status: StatusCode::BAD_REQUEST,
                    code: "MISSING_PARAMETERS",
                    message: "Adresse et chaîne sont requis".to_string(),
                },
                ValidationError::InvalidAddress { .. }
                | ValidationError::AddressFormat { .. }
                | ValidationError::AddressChecksum { .. } => ApiError {
                    status: StatusCode::BAD_REQUEST,
                    code: "INVALID_ADDRESS",
                    message: "Adresse Ethereum invalide".to_string(),
                },
                ValidationError::UnsupportedChain { .. } => ApiError {
                    status: StatusCode::BAD_REQUEST,
                    code: "UNSUPPORTED_CHAIN",
                    message: v.to_string(),
                },
            },
            BalanceError::Fetch { .. } => ApiError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                code: "FETCH_ERROR",
                message: err.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = BalanceResponse::err(self.message, self.code);
        (self.status, Json(body)).into_response()
    }
}
