//! Base64 envelope for crossing text-only boundaries (JSON bodies).

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::options::PrintOptions;
use crate::{NormalizeError, Result, render_print_pdf};

/// Decode a base64 payload, tolerating a `data:...;base64,` prefix and
/// embedded whitespace.
pub fn decode_base64(payload: &str) -> Result<Vec<u8>> {
    let body = match payload.trim_start().strip_prefix("data:") {
        Some(rest) => rest
            .split_once(',')
            .map(|(_, data)| data)
            .ok_or_else(|| NormalizeError::Decode("malformed data URL".into()))?,
        None => payload,
    };
    let cleaned: String = body.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    if cleaned.is_empty() {
        return Err(NormalizeError::Decode("empty base64 payload".into()));
    }
    STANDARD
        .decode(cleaned.as_bytes())
        .map_err(|e| NormalizeError::Decode(format!("invalid base64: {e}")))
}

pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Base64 image in, base64 PDF out.
pub fn render_print_pdf_base64(image_b64: &str, options: &PrintOptions) -> Result<String> {
    let bytes = decode_base64(image_b64)?;
    let doc = render_print_pdf(&bytes, options)?;
    Ok(encode_base64(&doc.bytes))
}
