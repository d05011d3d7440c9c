//! Page composition: center a normalized image on an A4 page.

use tracing::info;

use crate::Result;
use crate::geometry::{PageSize, Rect, fit_centered, mm_to_pt};
use crate::normalize::NormalizedImage;
use crate::options::PrintOptions;
use crate::orientation::Orientation;
use crate::pdf::PageBuilder;

/// An encoded single-page print document.
#[derive(Debug, Clone)]
pub struct PrintDocument {
    pub bytes: Vec<u8>,
    pub page: PageSize,
    /// Where the image landed on the page, in points.
    pub placement: Rect,
    pub orientation: Orientation,
}

/// Compute where an image of `width`×`height` pixels goes on `page`.
pub fn placement_on_page(width: u32, height: u32, page: PageSize, margin_mm: f64) -> Rect {
    let region = page.drawable_region(mm_to_pt(margin_mm));
    fit_centered(f64::from(width), f64::from(height), region)
}

/// Embed `image` centered on an A4 page matching its orientation.
pub fn compose_page(image: &NormalizedImage, options: &PrintOptions) -> Result<PrintDocument> {
    options.validate()?;

    let page = PageSize::a4(image.orientation);
    let placement = placement_on_page(image.width(), image.height(), page, options.margin_mm);

    let mut builder = PageBuilder::new(page);
    builder.draw_image(&image.pixels, placement)?;
    let bytes = builder.finish()?;

    info!(
        orientation = %image.orientation,
        page_w = page.width,
        page_h = page.height,
        x = placement.x,
        y = placement.y,
        w = placement.width,
        h = placement.height,
        bytes = bytes.len(),
        "Composed print page"
    );

    Ok(PrintDocument {
        bytes,
        page,
        placement,
        orientation: image.orientation,
    })
}
