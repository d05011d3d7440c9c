use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use super::api;
use crate::app::SharedState;

/// Create the axum router with all routes.
pub fn create_router(state: SharedState) -> Router {
    let body_limit = state.config().max_upload_bytes();

    Router::new()
        // --- Core ---
        .route("/status", get(status_handler))
        .route("/api/age-levels", get(api::age::get_age_levels))
        // --- Print ---
        .merge(build_pdf_routes(body_limit))
        // --- Middleware ---
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Routes that accept image payloads.
///
/// base64 bodies are a third larger than the raw image, so the JSON routes
/// get the same headroom on top of the upload limit.
fn build_pdf_routes(limit: usize) -> Router<SharedState> {
    Router::new()
        .route("/api/pdf", post(api::pdf::create_pdf))
        .route("/api/pdf/upload", post(api::pdf::upload_pdf))
        .route("/api/pdf/story", post(api::pdf::create_story_pdf))
        .layer(DefaultBodyLimit::max(limit + limit / 3 + 1024))
}

async fn status_handler() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
