//! JSON error-response helpers.

use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// 502 with a JSON error body. Used when the upstream LLM call fails or
/// returns nothing usable.
pub fn bad_gateway(message: impl Into<String>) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
}
