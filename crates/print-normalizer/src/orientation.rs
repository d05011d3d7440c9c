//! Page orientation detection.
//!
//! Landscape when an image is wider than it is tall; square counts as portrait.

use std::fmt;

use image::DynamicImage;
use tracing::debug;

/// Orientation of a source image and of the page it is printed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Classify a width/height pair.
    pub fn of<T: PartialOrd>(width: T, height: T) -> Self {
        if width > height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    /// Classify a decoded image.
    pub fn detect(img: &DynamicImage) -> Self {
        let (w, h) = (img.width(), img.height());
        let orientation = Self::of(w, h);
        debug!(w, h, %orientation, "Detected image orientation");
        orientation
    }

    pub fn is_landscape(self) -> bool {
        self == Self::Landscape
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    fn create_test_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([128])))
    }

    #[test]
    fn test_landscape_detected() {
        let img = create_test_image(8, 4);
        assert_eq!(Orientation::detect(&img), Orientation::Landscape);
    }

    #[test]
    fn test_portrait_detected() {
        let img = create_test_image(4, 8);
        assert_eq!(Orientation::detect(&img), Orientation::Portrait);
    }

    #[test]
    fn test_square_is_portrait() {
        let img = create_test_image(5, 5);
        assert_eq!(Orientation::detect(&img), Orientation::Portrait);
    }

    #[test]
    fn test_one_pixel_wider_is_landscape() {
        assert_eq!(Orientation::of(1025u32, 1024u32), Orientation::Landscape);
        assert_eq!(Orientation::of(1024u32, 1025u32), Orientation::Portrait);
    }

    #[test]
    fn test_float_dimensions() {
        assert_eq!(Orientation::of(841.89, 595.28), Orientation::Landscape);
        assert!(!Orientation::of(595.28, 841.89).is_landscape());
    }

    #[test]
    fn test_display() {
        assert_eq!(Orientation::Portrait.to_string(), "portrait");
        assert_eq!(Orientation::Landscape.to_string(), "landscape");
    }
}
