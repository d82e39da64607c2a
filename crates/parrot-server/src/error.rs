//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the single error type handlers return. Its
//! `IntoResponse` impl produces the fixed JSON envelopes of the public
//! contract; the detail string each variant carries is logged and never
//! sent to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use parrot_core::ContractError;

/// Client-facing message for rejected compile input.
pub const INVALID_INPUT_MSG: &str = "无效的代码输入。";
/// Client-facing message for a failed completion call.
pub const UPSTREAM_MSG: &str = "调用编译器时出错。";
/// Client-facing message for any other failure.
pub const INTERNAL_MSG: &str = "服务器内部错误。";

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body failed `code` validation (400).
    #[error("invalid code input: {0}")]
    InvalidInput(String),

    /// The completion call failed, whether transport, status, or the
    /// reply breaking the compile contract (500).
    #[error("compiler invocation failed: {0}")]
    Upstream(String),

    /// Anything else that went wrong while handling the request (500).
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidInput(detail) => {
                tracing::debug!(%detail, "rejected compile input");
                (StatusCode::BAD_REQUEST, INVALID_INPUT_MSG)
            }
            ApiError::Upstream(detail) => {
                tracing::warn!(%detail, "completion call failed");
                (StatusCode::INTERNAL_SERVER_ERROR, UPSTREAM_MSG)
            }
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "request handling failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MSG)
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<ContractError> for ApiError {
    fn from(err: ContractError) -> Self {
        ApiError::Upstream(err.to_string())
    }
}
