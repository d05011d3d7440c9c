//! Resampling onto the canonical print pixel grid.
//!
//! The flattened source is scaled with the configured kernel (Lanczos3 by
//! default) and either letterboxed on a white canvas of the grid size or
//! stretched to fill it.

use image::RgbImage;
use image::imageops::{self, FilterType};
use tracing::debug;

use crate::flatten::WHITE;
use crate::geometry::{PixelGrid, fit_within_grid};
use crate::options::ContentFit;

/// A grid-sized buffer and the pixel rectangle holding the source content.
#[derive(Debug, Clone)]
pub struct Resampled {
    pub pixels: RgbImage,
    /// `(x, y, width, height)` of the content, top-left origin.
    pub content: (u32, u32, u32, u32),
}

/// Resample `img` to exactly `grid`.
pub fn resample_to_grid(
    img: &RgbImage,
    grid: PixelGrid,
    filter: FilterType,
    fit: ContentFit,
) -> Resampled {
    let (orig_w, orig_h) = img.dimensions();

    match fit {
        ContentFit::Stretch => {
            debug!(
                orig_w,
                orig_h,
                grid_w = grid.width,
                grid_h = grid.height,
                "Stretching image to print grid"
            );
            Resampled {
                pixels: resize(img, grid.width, grid.height, filter),
                content: (0, 0, grid.width, grid.height),
            }
        }
        ContentFit::Letterbox => {
            let (new_w, new_h) = fit_within_grid(orig_w, orig_h, grid);
            let offset_x = (grid.width - new_w) / 2;
            let offset_y = (grid.height - new_h) / 2;

            debug!(
                orig_w,
                orig_h,
                new_w,
                new_h,
                offset_x,
                offset_y,
                "Letterboxing image onto print grid"
            );

            let scaled = resize(img, new_w, new_h, filter);
            if (new_w, new_h) == (grid.width, grid.height) {
                return Resampled {
                    pixels: scaled,
                    content: (0, 0, new_w, new_h),
                };
            }

            let mut canvas = RgbImage::from_pixel(grid.width, grid.height, WHITE);
            imageops::replace(&mut canvas, &scaled, i64::from(offset_x), i64::from(offset_y));
            Resampled {
                pixels: canvas,
                content: (offset_x, offset_y, new_w, new_h),
            }
        }
    }
}

/// Resize, skipping the kernel entirely when the size already matches.
fn resize(img: &RgbImage, width: u32, height: u32, filter: FilterType) -> RgbImage {
    if img.dimensions() == (width, height) {
        debug!(width, height, "Image already at target size, skipping resize");
        return img.clone();
    }
    imageops::resize(img, width, height, filter)
}
