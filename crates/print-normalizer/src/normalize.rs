//! Orientation-aware resampling of an encoded image to the print grid.

use std::io::Cursor;

use image::{DynamicImage, ImageError, ImageReader, RgbImage};
use tracing::{debug, info};

use crate::flatten::flatten_onto_white;
use crate::geometry::PixelGrid;
use crate::options::PrintOptions;
use crate::orientation::Orientation;
use crate::resample::resample_to_grid;
use crate::{NormalizeError, Result};

/// An opaque RGB buffer at exactly the canonical grid size.
#[derive(Debug, Clone)]
pub struct NormalizedImage {
    pub pixels: RgbImage,
    pub orientation: Orientation,
    /// Source dimensions before resampling.
    pub source_size: (u32, u32),
    /// Pixel rectangle `(x, y, width, height)` occupied by the source content.
    pub content: (u32, u32, u32, u32),
}

impl NormalizedImage {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

/// Decode an encoded image, detecting its format from the bytes.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| NormalizeError::Decode(e.to_string()))?;
    if reader.format().is_none() {
        return Err(NormalizeError::Decode("unrecognized image format".into()));
    }

    let img = reader.decode().map_err(|e| match e {
        // Allocation limits are hit by oversized inputs, not malformed ones.
        ImageError::Limits(limit) => NormalizeError::Render(limit.to_string()),
        other => NormalizeError::Decode(other.to_string()),
    })?;

    if img.width() == 0 || img.height() == 0 {
        return Err(NormalizeError::Decode("image has zero area".into()));
    }
    Ok(img)
}

/// Decode, flatten and resample `bytes` to the A4 grid for `options`.
pub fn normalize(bytes: &[u8], options: &PrintOptions) -> Result<NormalizedImage> {
    options.validate()?;

    let img = decode_image(bytes)?;
    let source_size = (img.width(), img.height());
    let orientation = Orientation::detect(&img);
    let grid = PixelGrid::a4(orientation, options.target_dpi);

    let flat = flatten_onto_white(&img);
    drop(img);

    let resampled = resample_to_grid(
        &flat,
        grid,
        options.filter.filter_type(),
        options.content_fit,
    );

    info!(
        src_w = source_size.0,
        src_h = source_size.1,
        grid_w = grid.width,
        grid_h = grid.height,
        %orientation,
        filter = %options.filter,
        fit = %options.content_fit,
        "Normalized image for print"
    );
    debug!(content = ?resampled.content, "Content placement on grid");

    Ok(NormalizedImage {
        pixels: resampled.pixels,
        orientation,
        source_size,
        content: resampled.content,
    })
}
