//! Shared helpers for unit tests.

use std::io::{Cursor, Read};

use flate2::read::ZlibDecoder;
use image::{DynamicImage, ImageFormat};
use lopdf::content::Content;
use lopdf::{Document, Object};

pub(crate) fn encode(img: &DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), format).unwrap();
    buf
}

pub(crate) fn encode_png(img: &DynamicImage) -> Vec<u8> {
    encode(img, ImageFormat::Png)
}

pub(crate) fn encode_jpeg(img: &DynamicImage) -> Vec<u8> {
    encode(img, ImageFormat::Jpeg)
}

/// Geometry read back from a generated single-page PDF.
#[derive(Debug)]
pub(crate) struct PdfInfo {
    pub media_box: (f64, f64, f64, f64),
    /// Operands of the first `cm` operator (image placement).
    pub cm: [f64; 6],
    /// Width and height of the first image XObject.
    pub image_size: (u32, u32),
    /// Inflated RGB samples of the first image XObject.
    pub image_data: Vec<u8>,
    /// Operands of every `Tj` operator, in drawing order.
    pub texts: Vec<String>,
    /// Operands of every `Td` operator (text baseline origins), in drawing order.
    pub text_origins: Vec<(f64, f64)>,
}

impl PdfInfo {
    /// RGB sample at `(x, y)` of the embedded image, top-left origin.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = ((y * self.image_size.0 + x) * 3) as usize;
        [self.image_data[i], self.image_data[i + 1], self.image_data[i + 2]]
    }
}

/// Inflate a zlib (`/FlateDecode`) stream body.
pub(crate) fn inflate(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    ZlibDecoder::new(data).read_to_end(&mut out).unwrap();
    out
}

fn float(obj: &Object) -> f64 {
    f64::from(obj.as_float().unwrap())
}

pub(crate) fn inspect_pdf(bytes: &[u8]) -> PdfInfo {
    let doc = Document::load_mem(bytes).unwrap();
    let pages = doc.get_pages();
    assert_eq!(pages.len(), 1, "expected a single page");
    let page_id = *pages.values().next().unwrap();

    let page = doc.get_object(page_id).unwrap().as_dict().unwrap();
    let mb = page.get(b"MediaBox").unwrap().as_array().unwrap();
    let media_box = (float(&mb[0]), float(&mb[1]), float(&mb[2]), float(&mb[3]));

    let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();
    let cm_op = content
        .operations
        .iter()
        .find(|op| op.operator == "cm")
        .expect("no cm operator");
    let mut cm = [0.0; 6];
    for (slot, operand) in cm.iter_mut().zip(&cm_op.operands) {
        *slot = float(operand);
    }
    let texts = content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .map(|op| match &op.operands[0] {
            Object::String(bytes, _) => bytes.iter().map(|&b| b as char).collect(),
            other => panic!("unexpected Tj operand {other:?}"),
        })
        .collect();
    let text_origins = content
        .operations
        .iter()
        .filter(|op| op.operator == "Td")
        .map(|op| (float(&op.operands[0]), float(&op.operands[1])))
        .collect();

    let image = doc
        .objects
        .values()
        .filter_map(|o| o.as_stream().ok())
        .find(|s| {
            s.dict
                .get(b"Subtype")
                .and_then(Object::as_name)
                .map(|n| n == b"Image")
                .unwrap_or(false)
        })
        .expect("no image XObject");
    let image_size = (
        image.dict.get(b"Width").unwrap().as_i64().unwrap() as u32,
        image.dict.get(b"Height").unwrap().as_i64().unwrap() as u32,
    );

    let image_data = inflate(&image.content);

    PdfInfo {
        media_box,
        cm,
        image_size,
        image_data,
        texts,
        text_origins,
    }
}
