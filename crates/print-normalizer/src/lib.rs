//! Print-ready PDF generation for coloring pages.
//!
//! Decodes an arbitrary raster image, flattens transparency onto white,
//! resamples it to the A4 pixel grid for the requested DPI, and embeds it
//! centered on a single A4 page (portrait or landscape).

pub mod age;
pub mod compose;
pub mod envelope;
pub mod flatten;
pub mod geometry;
pub mod normalize;
pub mod options;
pub mod orientation;
mod pdf;
pub mod resample;
pub mod story;
pub mod text;

#[cfg(test)]
mod testutil;

// Re-exports for convenience
pub use age::AgeLevel;
pub use compose::{PrintDocument, compose_page};
pub use envelope::{decode_base64, encode_base64, render_print_pdf_base64};
pub use geometry::{PageSize, PixelGrid, Rect};
pub use normalize::{NormalizedImage, normalize};
pub use options::{ContentFit, PrintOptions, ResampleFilter};
pub use orientation::Orientation;
pub use story::{StoryPage, compose_story_page};

/// ISO 216 A4 width in millimeters.
pub const A4_WIDTH_MM: f64 = 210.0;

/// ISO 216 A4 height in millimeters.
pub const A4_HEIGHT_MM: f64 = 297.0;

/// Default print resolution.
pub const DEFAULT_DPI: u32 = 300;

/// Errors produced by the print pipeline.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("Failed to render document: {0}")]
    Render(String),

    #[error("Invalid print options: {0}")]
    InvalidOptions(String),
}

impl NormalizeError {
    /// True when the input itself was unusable (bad bytes, bad envelope).
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Decode(_) | Self::InvalidOptions(_))
    }
}

/// Result type alias for print pipeline operations.
pub type Result<T> = std::result::Result<T, NormalizeError>;

/// Run the full pipeline: decode + resample, then compose the A4 page.
pub fn render_print_pdf(bytes: &[u8], options: &PrintOptions) -> Result<PrintDocument> {
    let normalized = normalize(bytes, options)?;
    compose_page(&normalized, options)
}
