//! Page geometry: A4 sizes, unit conversion, and aspect-preserving fit.
//!
//! Page-space values are PDF points (1/72 inch) with the origin at the
//! bottom-left corner of the page.

use crate::orientation::Orientation;
use crate::{A4_HEIGHT_MM, A4_WIDTH_MM};

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// PDF points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Convert millimeters to PDF points.
pub fn mm_to_pt(mm: f64) -> f64 {
    mm / MM_PER_INCH * POINTS_PER_INCH
}

/// Convert millimeters to whole pixels at the given resolution.
pub fn mm_to_px(mm: f64, dpi: u32) -> u32 {
    (mm / MM_PER_INCH * f64::from(dpi)).round() as u32
}

/// Physical page size in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    /// A4 in the given orientation (landscape swaps the axes).
    pub fn a4(orientation: Orientation) -> Self {
        let (w, h) = (mm_to_pt(A4_WIDTH_MM), mm_to_pt(A4_HEIGHT_MM));
        match orientation {
            Orientation::Portrait => Self { width: w, height: h },
            Orientation::Landscape => Self { width: h, height: w },
        }
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::of(self.width, self.height)
    }

    /// The page minus `margin` points on all four sides.
    pub fn drawable_region(&self, margin: f64) -> Rect {
        Rect {
            x: margin,
            y: margin,
            width: self.width - 2.0 * margin,
            height: self.height - 2.0 * margin,
        }
    }
}

/// Canonical pixel grid for a page at a fixed resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelGrid {
    pub width: u32,
    pub height: u32,
}

impl PixelGrid {
    /// The A4 grid at `dpi`. At 300 DPI this is 2480×3508 (portrait).
    pub fn a4(orientation: Orientation, dpi: u32) -> Self {
        let (w, h) = (mm_to_px(A4_WIDTH_MM, dpi), mm_to_px(A4_HEIGHT_MM, dpi));
        match orientation {
            Orientation::Portrait => Self { width: w, height: h },
            Orientation::Landscape => Self { width: h, height: w },
        }
    }

    pub fn aspect(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y + self.height
    }
}

/// Fit a `width`×`height` box into `region` without distortion, centered.
///
/// A relatively wider box is fitted to the region width, anything else to
/// the region height; the leftover space is split evenly on both sides.
pub fn fit_centered(width: f64, height: f64, region: Rect) -> Rect {
    let aspect = width / height;
    let (w, h) = if aspect > region.aspect() {
        (region.width, region.width / aspect)
    } else {
        (region.height * aspect, region.height)
    };
    Rect {
        x: region.x + (region.width - w) / 2.0,
        y: region.y + (region.height - h) / 2.0,
        width: w,
        height: h,
    }
}

/// Largest pixel size with the source aspect ratio that fits in `grid`.
///
/// Dimensions are rounded to whole pixels and never drop below one.
pub fn fit_within_grid(src_w: u32, src_h: u32, grid: PixelGrid) -> (u32, u32) {
    let scale_x = f64::from(grid.width) / f64::from(src_w);
    let scale_y = f64::from(grid.height) / f64::from(src_h);
    let scale = scale_x.min(scale_y);
    let w = (f64::from(src_w) * scale).round() as u32;
    let h = (f64::from(src_h) * scale).round() as u32;
    (w.clamp(1, grid.width), h.clamp(1, grid.height))
}
