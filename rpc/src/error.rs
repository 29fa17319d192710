//! Translation from wallet errors to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lumen_wallet::WalletError;
use serde::Serialize;

/// Body shared by every non-2xx answer.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// A failed request, ready to serialize.
///
/// Built from a [`WalletError`] so the status code follows the error
/// kind: caller mistakes are 400, a missing account is 404, an
/// unreachable node is 503, and everything the node itself refused
/// is 500.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorBody {
                error: message.into(),
                details: None,
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<WalletError> for ApiError {
    fn from(err: WalletError) -> Self {
        let status = match &err {
            WalletError::InvalidKey(_)
            | WalletError::InvalidAddress(_)
            | WalletError::InvalidAmount(_) => StatusCode::BAD_REQUEST,
            WalletError::AccountNotFound(_) => StatusCode::NOT_FOUND,
            WalletError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            WalletError::Rejected { .. } | WalletError::Build(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let details = match &err {
            WalletError::AccountNotFound(address) => Some(address.to_string()),
            _ => None,
        };
        Self {
            status,
            body: ErrorBody {
                error: err.to_string(),
                details,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
