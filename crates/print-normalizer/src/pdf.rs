//! Minimal single-page PDF writer on top of `lopdf`.
//!
//! Images are embedded as Flate-compressed `/DeviceRGB` XObjects; text uses
//! the standard Helvetica faces with WinAnsi encoding. Nothing time- or
//! randomness-dependent is written, so output is byte-stable.

use std::collections::BTreeSet;
use std::io::Write;

use flate2::Compression;
use flate2::write::ZlibEncoder;
use image::RgbImage;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, StringFormat, dictionary};
use tracing::debug;

use crate::geometry::{PageSize, Rect};
use crate::text::{Font, to_win_ansi};
use crate::{NormalizeError, Result};

const PDF_VERSION: &str = "1.5";

fn render_err(context: &str, e: impl std::fmt::Display) -> NormalizeError {
    NormalizeError::Render(format!("{context}: {e}"))
}

/// Accumulates drawing operations for one page.
pub(crate) struct PageBuilder {
    page: PageSize,
    operations: Vec<Operation>,
    images: Vec<Stream>,
    fonts: BTreeSet<Font>,
}

impl PageBuilder {
    pub(crate) fn new(page: PageSize) -> Self {
        Self {
            page,
            operations: Vec::new(),
            images: Vec::new(),
            fonts: BTreeSet::new(),
        }
    }

    /// Place `pixels` so that it exactly covers `rect` (page points).
    pub(crate) fn draw_image(&mut self, pixels: &RgbImage, rect: Rect) -> Result<()> {
        let (width, height) = pixels.dimensions();
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(pixels.as_raw())
            .map_err(|e| render_err("image compression failed", e))?;
        let data = encoder
            .finish()
            .map_err(|e| render_err("image compression failed", e))?;

        debug!(
            width,
            height,
            raw = pixels.as_raw().len(),
            compressed = data.len(),
            "Embedding image XObject"
        );

        let stream = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => i64::from(width),
                "Height" => i64::from(height),
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
                "Filter" => "FlateDecode",
            },
            data,
        );
        let name = format!("Im{}", self.images.len());
        self.images.push(stream);

        self.operations.push(Operation::new("q", vec![]));
        self.operations.push(Operation::new(
            "cm",
            vec![
                real(rect.width),
                real(0.0),
                real(0.0),
                real(rect.height),
                real(rect.x),
                real(rect.y),
            ],
        ));
        self.operations
            .push(Operation::new("Do", vec![Object::Name(name.into_bytes())]));
        self.operations.push(Operation::new("Q", vec![]));
        Ok(())
    }

    /// Draw a single line of text with its baseline starting at `(x, y)`.
    pub(crate) fn draw_text(&mut self, font: Font, size: f64, x: f64, y: f64, text: &str) {
        self.fonts.insert(font);
        self.operations.push(Operation::new("BT", vec![]));
        self.operations.push(Operation::new(
            "Tf",
            vec![Object::Name(font.resource_name().as_bytes().to_vec()), real(size)],
        ));
        self.operations
            .push(Operation::new("Td", vec![real(x), real(y)]));
        self.operations.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        ));
        self.operations.push(Operation::new("ET", vec![]));
    }

    /// Serialize the page into a complete PDF document.
    pub(crate) fn finish(self) -> Result<Vec<u8>> {
        let mut doc = Document::with_version(PDF_VERSION);
        let pages_id = doc.new_object_id();

        let mut xobjects = Dictionary::new();
        for (index, stream) in self.images.into_iter().enumerate() {
            let id = doc.add_object(stream);
            xobjects.set(format!("Im{index}"), id);
        }

        let mut fonts = Dictionary::new();
        for font in &self.fonts {
            let id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(font.resource_name(), id);
        }

        let mut resources = Dictionary::new();
        if !xobjects.is_empty() {
            resources.set("XObject", xobjects);
        }
        if !fonts.is_empty() {
            resources.set("Font", fonts);
        }
        let resources_id = doc.add_object(resources);

        let content = Content {
            operations: self.operations,
        };
        let encoded = content
            .encode()
            .map_err(|e| render_err("content stream encoding failed", e))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![real(0.0), real(0.0), real(self.page.width), real(self.page.height)],
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut out = Vec::new();
        doc.save_to(&mut out)
            .map_err(|e| render_err("document serialization failed", e))?;
        debug!(bytes = out.len(), "PDF document written");
        Ok(out)
    }
}

fn real(value: f64) -> Object {
    Object::Real(value as f32)
}
