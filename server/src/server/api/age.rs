//! Age level API.

use axum::Json;
use print_normalizer::AgeLevel;
use serde_json::{Value, json};

/// GET /api/age-levels – List supported age buckets
pub async fn get_age_levels() -> Json<Value> {
    let levels: Vec<Value> = AgeLevel::all()
        .iter()
        .map(|level| json!({ "key": level.key(), "name": level.label() }))
        .collect();
    Json(json!({ "age_levels": levels }))
}
