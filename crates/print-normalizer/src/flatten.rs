//! Transparency flattening onto an opaque white background.
//!
//! PDF image XObjects written by this crate carry no soft mask, so every
//! pixel is composited over white before resampling.

use image::{DynamicImage, Rgb, RgbImage, Rgba};
use tracing::debug;

/// Opaque white.
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Composite `img` over white, keeping its dimensions.
///
/// Images without an alpha channel are only converted to RGB8.
pub fn flatten_onto_white(img: &DynamicImage) -> RgbImage {
    let (width, height) = (img.width(), img.height());

    if !img.color().has_alpha() {
        debug!(width, height, "Image is opaque, converting to RGB");
        return img.to_rgb8();
    }

    debug!(width, height, "Flattening transparency onto white");
    let rgba = img.to_rgba8();
    let mut out = RgbImage::from_pixel(width, height, WHITE);
    for (x, y, pixel) in rgba.enumerate_pixels() {
        out.put_pixel(x, y, blend_over_white(pixel));
    }
    out
}

/// `out = a * fg + (1 - a) * 255`, rounded, in integer arithmetic.
fn blend_over_white(fg: &Rgba<u8>) -> Rgb<u8> {
    let alpha = u32::from(fg[3]);
    if alpha == 255 {
        return Rgb([fg[0], fg[1], fg[2]]);
    }
    let inv = 255 - alpha;
    let channel = |c: u8| ((u32::from(c) * alpha + 255 * inv + 127) / 255) as u8;
    Rgb([channel(fg[0]), channel(fg[1]), channel(fg[2])])
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, LumaA, RgbaImage};

    #[test]
    fn fully_transparent_becomes_white() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0])));
        let flat = flatten_onto_white(&img);
        assert!(flat.pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn opaque_pixels_are_unchanged() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 255])));
        let flat = flatten_onto_white(&img);
        assert_eq!(flat.dimensions(), (3, 2));
        assert!(flat.pixels().all(|p| *p == Rgb([10, 20, 30])));
    }

    #[test]
    fn half_transparent_black_is_mid_gray() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 128])));
        let flat = flatten_onto_white(&img);
        // 255 * 127 / 255 rounded
        assert_eq!(*flat.get_pixel(0, 0), Rgb([127, 127, 127]));
    }

    #[test]
    fn gray_alpha_is_flattened() {
        let mut img = GrayAlphaImage::from_pixel(2, 1, LumaA([0, 255]));
        img.put_pixel(1, 0, LumaA([0, 0]));
        let flat = flatten_onto_white(&DynamicImage::ImageLumaA8(img));
        assert_eq!(*flat.get_pixel(0, 0), Rgb([0, 0, 0]));
        assert_eq!(*flat.get_pixel(1, 0), WHITE);
    }

    #[test]
    fn opaque_rgb_passes_through() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb([1, 2, 3])));
        let flat = flatten_onto_white(&img);
        assert!(flat.pixels().all(|p| *p == Rgb([1, 2, 3])));
    }
}
