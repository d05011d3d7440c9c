//! Print PDF API.

use axum::Json;
use axum::body::Body;
use axum::extract::rejection::JsonRejection;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use print_normalizer::{AgeLevel, StoryPage, decode_base64, encode_base64};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::app::SharedState;
use crate::services::print;

use super::{err_json, print_err_json};

type ApiResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

const DOWNLOAD_FILENAME: &str = "coloring-page.pdf";
const DEFAULT_TOTAL_EPISODES: u32 = 10;

#[derive(Debug, Deserialize)]
pub struct PdfRequest {
    pub image_b64: String,
    #[serde(default)]
    pub margin_mm: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct StoryPdfRequest {
    pub image_b64: String,
    pub episode: u32,
    #[serde(default = "default_total_episodes")]
    pub total_episodes: u32,
    pub title: String,
    pub story_text: String,
    pub character_name: String,
    #[serde(default)]
    pub age_level: Option<String>,
    #[serde(default)]
    pub choice_info: Option<String>,
}

fn default_total_episodes() -> u32 {
    DEFAULT_TOTAL_EPISODES
}

/// POST /api/pdf – Convert a base64 image into a base64 A4 PDF
pub async fn create_pdf(
    State(state): State<SharedState>,
    payload: Result<Json<PdfRequest>, JsonRejection>,
) -> ApiResult {
    let Json(req) = payload.map_err(|e| err_json(400, &e.body_text()))?;

    let mut options = state.print_options().clone();
    if let Some(margin) = req.margin_mm {
        options = options.with_margin_mm(margin);
    }

    let bytes = decode_base64(&req.image_b64).map_err(|e| print_err_json(&e))?;
    let doc = print::render_pdf(bytes, options)
        .await
        .map_err(|e| print_err_json(&e))?;

    Ok(Json(json!({
        "success": true,
        "pdf_b64": encode_base64(&doc.bytes),
        "orientation": doc.orientation.as_str(),
        "page_width_pt": doc.page.width,
        "page_height_pt": doc.page.height,
    })))
}

/// POST /api/pdf/upload – Convert an uploaded image into a PDF download
pub async fn upload_pdf(
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> Result<Response, (StatusCode, Json<Value>)> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_err)? {
        let name = field.name().unwrap_or("").to_string();
        if name == "image" {
            let data = field.bytes().await.map_err(multipart_err)?;

            let doc = print::render_pdf(data.to_vec(), state.print_options().clone())
                .await
                .map_err(|e| print_err_json(&e))?;

            let resp = Response::builder()
                .header(header::CONTENT_TYPE, "application/pdf")
                .header(
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{DOWNLOAD_FILENAME}\""),
                )
                .body(Body::from(doc.bytes))
                .map_err(|e| err_json(500, &e.to_string()))?;
            return Ok(resp);
        }
    }

    Err(err_json(400, "No image file provided"))
}

/// Keep the multipart layer's status (413 for an oversized body, 400 otherwise).
fn multipart_err(e: MultipartError) -> (StatusCode, Json<Value>) {
    tracing::warn!("Multipart upload rejected: {e}");
    err_json(e.status().as_u16(), &e.body_text())
}

/// POST /api/pdf/story – Render a story page (image + episode text)
pub async fn create_story_pdf(
    State(state): State<SharedState>,
    payload: Result<Json<StoryPdfRequest>, JsonRejection>,
) -> ApiResult {
    let Json(req) = payload.map_err(|e| err_json(400, &e.body_text()))?;

    let age_level = match req.age_level.as_deref() {
        None => AgeLevel::default(),
        Some(raw) => AgeLevel::parse(raw)
            .ok_or_else(|| err_json(400, &format!("Unknown age level: {raw}")))?,
    };

    let bytes = decode_base64(&req.image_b64).map_err(|e| print_err_json(&e))?;
    let page = StoryPage {
        episode: req.episode,
        total_episodes: req.total_episodes,
        title: req.title,
        story_text: req.story_text,
        character_name: req.character_name,
        age_level,
        choice_info: req.choice_info,
    };

    let doc = print::render_story_pdf(bytes, page, state.print_options().clone())
        .await
        .map_err(|e| print_err_json(&e))?;

    Ok(Json(json!({
        "success": true,
        "pdf_b64": encode_base64(&doc.bytes),
    })))
}
