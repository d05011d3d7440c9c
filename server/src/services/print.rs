//! Print jobs run on the blocking pool.
//!
//! Decoding and resampling an A4 grid is CPU-bound, so every request hands
//! its work to `spawn_blocking` and awaits the result.

use print_normalizer::{
    NormalizeError, PrintDocument, PrintOptions, StoryPage, compose_story_page, render_print_pdf,
};

/// Render raw image bytes into an A4 print document.
pub async fn render_pdf(
    bytes: Vec<u8>,
    options: PrintOptions,
) -> Result<PrintDocument, NormalizeError> {
    run_blocking(move || render_print_pdf(&bytes, &options)).await
}

/// Render a story page (coloring image plus story text).
pub async fn render_story_pdf(
    bytes: Vec<u8>,
    page: StoryPage,
    options: PrintOptions,
) -> Result<PrintDocument, NormalizeError> {
    run_blocking(move || compose_story_page(&bytes, &page, &options)).await
}

async fn run_blocking<F>(job: F) -> Result<PrintDocument, NormalizeError>
where
    F: FnOnce() -> Result<PrintDocument, NormalizeError> + Send + 'static,
{
    let started = std::time::Instant::now();
    let result = tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| NormalizeError::Render(format!("print job aborted: {e}")))?;

    match &result {
        Ok(doc) => tracing::debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            bytes = doc.bytes.len(),
            "Print job finished"
        ),
        Err(e) => tracing::warn!("Print job failed: {e}"),
    }
    result
}
