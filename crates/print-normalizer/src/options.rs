//! Print configuration options.
//!
//! These options control the page margin, the resampling resolution and
//! kernel, and how source content is placed on the canonical pixel grid.

use std::fmt;
use std::str::FromStr;

use image::imageops::FilterType;

use crate::{A4_HEIGHT_MM, A4_WIDTH_MM, DEFAULT_DPI, NormalizeError, Result};

/// Lowest accepted print resolution.
pub const MIN_DPI: u32 = 72;

/// Highest accepted print resolution.
pub const MAX_DPI: u32 = 600;

/// Resampling kernel used when scaling to the pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResampleFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    /// Windowed sinc, best for line art.
    #[default]
    Lanczos3,
}

impl ResampleFilter {
    pub fn filter_type(self) -> FilterType {
        match self {
            Self::Nearest => FilterType::Nearest,
            Self::Triangle => FilterType::Triangle,
            Self::CatmullRom => FilterType::CatmullRom,
            Self::Gaussian => FilterType::Gaussian,
            Self::Lanczos3 => FilterType::Lanczos3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Triangle => "triangle",
            Self::CatmullRom => "catmullrom",
            Self::Gaussian => "gaussian",
            Self::Lanczos3 => "lanczos3",
        }
    }
}

impl fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResampleFilter {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" => Ok(Self::Nearest),
            "triangle" | "bilinear" => Ok(Self::Triangle),
            "catmullrom" | "catmull-rom" | "bicubic" => Ok(Self::CatmullRom),
            "gaussian" => Ok(Self::Gaussian),
            "lanczos3" | "lanczos" => Ok(Self::Lanczos3),
            other => Err(NormalizeError::InvalidOptions(format!(
                "unknown resample filter '{other}'"
            ))),
        }
    }
}

/// How source content is mapped onto the canonical pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentFit {
    /// Scale to fit with the source aspect ratio, centered on white.
    #[default]
    Letterbox,
    /// Resize to the full grid, ignoring the source aspect ratio.
    Stretch,
}

impl ContentFit {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Letterbox => "letterbox",
            Self::Stretch => "stretch",
        }
    }
}

impl fmt::Display for ContentFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentFit {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "letterbox" | "fit" => Ok(Self::Letterbox),
            "stretch" | "fill" => Ok(Self::Stretch),
            other => Err(NormalizeError::InvalidOptions(format!(
                "unknown content fit '{other}'"
            ))),
        }
    }
}

/// Configuration options for print output.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintOptions {
    /// Distance from each page edge to the drawable region, in millimeters.
    pub margin_mm: f64,

    /// Resolution of the canonical pixel grid.
    pub target_dpi: u32,

    /// Resampling kernel.
    pub filter: ResampleFilter,

    /// Placement of source content on the pixel grid.
    pub content_fit: ContentFit,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            margin_mm: 0.0,
            target_dpi: DEFAULT_DPI,
            filter: ResampleFilter::default(),
            content_fit: ContentFit::default(),
        }
    }
}

impl PrintOptions {
    /// Create options with edge-to-edge, 300 DPI, Lanczos3 defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the page margin in millimeters.
    pub fn with_margin_mm(mut self, val: f64) -> Self {
        self.margin_mm = val;
        self
    }

    /// Builder: set the target DPI.
    pub fn with_target_dpi(mut self, val: u32) -> Self {
        self.target_dpi = val;
        self
    }

    /// Builder: set the resampling filter.
    pub fn with_filter(mut self, val: ResampleFilter) -> Self {
        self.filter = val;
        self
    }

    /// Builder: set the content fit mode.
    pub fn with_content_fit(mut self, val: ContentFit) -> Self {
        self.content_fit = val;
        self
    }

    /// Check that the options describe a printable page.
    ///
    /// The margin must be finite, non-negative and leave a drawable area on
    /// both axes; the DPI must lie in `MIN_DPI..=MAX_DPI`.
    pub fn validate(&self) -> Result<()> {
        if !self.margin_mm.is_finite() || self.margin_mm < 0.0 {
            return Err(NormalizeError::InvalidOptions(format!(
                "margin must be a non-negative number of millimeters, got {}",
                self.margin_mm
            )));
        }
        let shortest_side = A4_WIDTH_MM.min(A4_HEIGHT_MM);
        if self.margin_mm * 2.0 >= shortest_side {
            return Err(NormalizeError::InvalidOptions(format!(
                "margin of {} mm leaves no drawable area",
                self.margin_mm
            )));
        }
        if !(MIN_DPI..=MAX_DPI).contains(&self.target_dpi) {
            return Err(NormalizeError::InvalidOptions(format!(
                "target DPI must be between {MIN_DPI} and {MAX_DPI}, got {}",
                self.target_dpi
            )));
        }
        Ok(())
    }
}
