//! REST API handlers grouped by domain.

pub mod age;
pub mod pdf;

use axum::Json;
use axum::http::StatusCode;
use print_normalizer::NormalizeError;
use serde_json::{Value, json};

/// Standard error response.
pub fn err_json(status: u16, message: &str) -> (StatusCode, Json<Value>) {
    (
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(json!({ "status": "error", "error": message })),
    )
}

/// Map a print pipeline error onto an HTTP error response.
///
/// Unusable input is the client's fault (400); anything else is ours (500).
pub fn print_err_json(e: &NormalizeError) -> (StatusCode, Json<Value>) {
    if e.is_input_error() {
        err_json(400, &e.to_string())
    } else {
        tracing::error!("Print rendering failed: {e}");
        err_json(500, &e.to_string())
    }
}
