//! Story pages: a coloring page above a block of story text.
//!
//! Layout (portrait A4, 10 mm margins):
//! ```text
//! +-------------------------------+
//! |                               |
//! |        coloring image         |
//! |     (fitted and centered)     |
//! |                               |
//! |  Episode 3: The Glowing Tree  |  <- 45 mm text area
//! |  story text, wrapped ...      |
//! |  Choice made: ...             |
//! +-------------------------------+
//!  Mia's Adventure • ...  Page 3 of 10
//! ```

use tracing::{debug, info};

use crate::age::AgeLevel;
use crate::compose::PrintDocument;
use crate::geometry::{PageSize, Rect, fit_centered, mm_to_pt};
use crate::normalize::normalize;
use crate::options::PrintOptions;
use crate::orientation::Orientation;
use crate::pdf::PageBuilder;
use crate::text::{Font, ellipsize, measure_text_width, wrap_text};
use crate::{NormalizeError, Result};

/// Page margin for story pages.
pub const STORY_MARGIN_MM: f64 = 10.0;

/// Height reserved for text below the image.
pub const TEXT_AREA_HEIGHT_MM: f64 = 45.0;

const TITLE_SIZE: f64 = 14.0;
const BODY_SIZE: f64 = 10.0;
const CHOICE_SIZE: f64 = 9.0;
const FOOTER_SIZE: f64 = 8.0;
const BODY_LEADING: f64 = 12.0;
const BODY_INSET: f64 = 10.0;
const CHOICE_GAP: f64 = 5.0;

/// Text content of one story page.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryPage {
    pub episode: u32,
    pub total_episodes: u32,
    pub title: String,
    pub story_text: String,
    pub character_name: String,
    pub age_level: AgeLevel,
    pub choice_info: Option<String>,
}

impl StoryPage {
    fn validate(&self) -> Result<()> {
        if self.episode == 0 || self.episode > self.total_episodes {
            return Err(NormalizeError::InvalidOptions(format!(
                "episode {} is outside 1..={}",
                self.episode, self.total_episodes
            )));
        }
        Ok(())
    }

    pub fn heading(&self) -> String {
        format!("Episode {}: {}", self.episode, self.title)
    }

    pub fn footer_left(&self) -> String {
        format!(
            "{}'s Adventure \u{2022} Little Lines \u{2022} {}",
            self.character_name,
            self.age_level.label()
        )
    }

    pub fn footer_right(&self) -> String {
        format!("Page {} of {}", self.episode, self.total_episodes)
    }
}

/// Regions of a story page, in points.
#[derive(Debug, Clone, Copy)]
pub struct StoryLayout {
    pub page: PageSize,
    pub margin: f64,
    /// Area available to the image, above the text area.
    pub image_area: Rect,
    /// Reserved text area at the bottom, inside the margins.
    pub text_area: Rect,
}

impl StoryLayout {
    pub fn a4() -> Self {
        let page = PageSize::a4(Orientation::Portrait);
        let margin = mm_to_pt(STORY_MARGIN_MM);
        let text_height = mm_to_pt(TEXT_AREA_HEIGHT_MM);
        let drawable = page.drawable_region(margin);
        Self {
            page,
            margin,
            image_area: Rect {
                x: drawable.x,
                y: drawable.y + text_height,
                width: drawable.width,
                height: drawable.height - text_height,
            },
            text_area: Rect {
                x: drawable.x,
                y: drawable.y,
                width: drawable.width,
                height: text_height,
            },
        }
    }
}

/// Render `image_bytes` with the story text onto one portrait A4 page.
///
/// The image goes through the same decode/flatten/resample path as plain
/// print pages; `options.margin_mm` is ignored in favour of the fixed
/// story layout.
pub fn compose_story_page(
    image_bytes: &[u8],
    story: &StoryPage,
    options: &PrintOptions,
) -> Result<PrintDocument> {
    story.validate()?;
    let image = normalize(image_bytes, options)?;

    let layout = StoryLayout::a4();
    let placement = fit_centered(
        f64::from(image.width()),
        f64::from(image.height()),
        layout.image_area,
    );

    let mut builder = PageBuilder::new(layout.page);
    builder.draw_image(&image.pixels, placement)?;

    let text_top = layout.text_area.top();

    // Title
    let heading = story.heading();
    let heading_width = measure_text_width(Font::HelveticaBold, TITLE_SIZE, &heading);
    builder.draw_text(
        Font::HelveticaBold,
        TITLE_SIZE,
        (layout.page.width - heading_width) / 2.0,
        text_top - 5.0,
        &heading,
    );

    // Story body
    let body_x = layout.margin + BODY_INSET;
    let max_width = layout.text_area.width - 2.0 * BODY_INSET;
    let choice = story.choice_info.as_deref().filter(|c| !c.trim().is_empty());

    // Lowest body baseline that keeps the text and the choice line inside the text area.
    let floor = layout.text_area.y
        + if choice.is_some() {
            BODY_LEADING + CHOICE_GAP
        } else {
            0.0
        };
    let lines = wrap_text(Font::Helvetica, BODY_SIZE, &story.story_text, max_width);
    let first_y = text_top - 22.0;
    let capacity = ((first_y - floor) / BODY_LEADING).floor() as usize + 1;
    if lines.len() > capacity {
        debug!(
            lines = lines.len(),
            capacity, "Story text exceeds text area, truncating"
        );
    }

    let mut y = first_y;
    for (index, line) in lines.iter().take(capacity).enumerate() {
        let truncated = index + 1 == capacity && lines.len() > capacity;
        let line = if truncated {
            ellipsize(Font::Helvetica, BODY_SIZE, line, max_width)
        } else {
            line.clone()
        };
        builder.draw_text(Font::Helvetica, BODY_SIZE, body_x, y, &line);
        y -= BODY_LEADING;
    }

    if let Some(choice) = choice {
        builder.draw_text(
            Font::HelveticaOblique,
            CHOICE_SIZE,
            body_x,
            y - CHOICE_GAP,
            &format!("Choice made: {choice}"),
        );
    }

    // Footer, just below the bottom margin line
    let footer_y = layout.margin - 5.0;
    builder.draw_text(
        Font::HelveticaOblique,
        FOOTER_SIZE,
        layout.margin,
        footer_y,
        &story.footer_left(),
    );
    let right = story.footer_right();
    let right_width = measure_text_width(Font::HelveticaOblique, FOOTER_SIZE, &right);
    builder.draw_text(
        Font::HelveticaOblique,
        FOOTER_SIZE,
        layout.page.width - layout.margin - right_width,
        footer_y,
        &right,
    );

    let bytes = builder.finish()?;
    info!(
        episode = story.episode,
        total = story.total_episodes,
        age = %story.age_level,
        bytes = bytes.len(),
        "Composed story page"
    );

    Ok(PrintDocument {
        bytes,
        page: layout.page,
        placement,
        orientation: Orientation::Portrait,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{encode_png, inspect_pdf};
    use image::{DynamicImage, Rgb, RgbImage};

    fn story() -> StoryPage {
        StoryPage {
            episode: 3,
            total_episodes: 10,
            title: "The Glowing Tree".into(),
            story_text: "Mia discovers a glowing magical tree in the forest. A doorway shimmers \
                         in its trunk, and tiny fairies dance around it. \"Come inside,\" they \
                         whisper. \"Adventure awaits!\""
                .into(),
            character_name: "Mia".into(),
            age_level: AgeLevel::Age6,
            choice_info: Some("Follow the fairies".into()),
        }
    }

    fn png(width: u32, height: u32) -> Vec<u8> {
        encode_png(&DynamicImage::ImageRgb8(RgbImage::from_pixel(
            width,
            height,
            Rgb([0, 0, 0]),
        )))
    }

    fn options() -> PrintOptions {
        PrintOptions::new().with_target_dpi(72)
    }

    #[test]
    fn image_stays_above_text_area() {
        let doc = compose_story_page(&png(60, 80), &story(), &options()).unwrap();
        let layout = StoryLayout::a4();
        assert!(doc.placement.y >= layout.text_area.top() - 1e-9);
        assert!(doc.placement.top() <= layout.image_area.top() + 1e-9);
        assert!(doc.placement.x >= layout.margin - 1e-9);
        assert!(doc.placement.right() <= layout.page.width - layout.margin + 1e-9);
    }

    #[test]
    fn landscape_image_is_letterboxed_on_portrait_page() {
        let doc = compose_story_page(&png(120, 60), &story(), &options()).unwrap();
        assert_eq!(doc.orientation, Orientation::Portrait);
        let layout = StoryLayout::a4();
        assert!((doc.placement.width - layout.image_area.width).abs() < 1e-9);
        assert!(doc.placement.height < layout.image_area.height);
    }

    #[test]
    fn page_carries_heading_body_choice_and_footer() {
        let doc = compose_story_page(&png(60, 80), &story(), &options()).unwrap();
        let info = inspect_pdf(&doc.bytes);

        assert_eq!(info.texts.first().map(String::as_str), Some("Episode 3: The Glowing Tree"));
        assert!(info.texts.iter().any(|t| t == "Choice made: Follow the fairies"));
        assert!(info.texts.iter().any(|t| t == "Page 3 of 10"));
        // Bullet is WinAnsi 0x95.
        assert!(
            info.texts
                .iter()
                .any(|t| t == "Mia's Adventure \u{95} Little Lines \u{95} Age 6")
        );

        let body: Vec<&String> = info
            .texts
            .iter()
            .skip(1)
            .take_while(|t| !t.starts_with("Choice made"))
            .collect();
        assert!(body.len() > 1, "story text should wrap");
        let max_width = StoryLayout::a4().text_area.width - 2.0 * BODY_INSET;
        for line in body {
            assert!(measure_text_width(Font::Helvetica, BODY_SIZE, line) <= max_width);
        }
    }

    #[test]
    fn long_story_stays_inside_text_area() {
        let layout = StoryLayout::a4();
        let long_text = "The brave little fox wandered past the silver river and over the hills. "
            .repeat(20);

        for choice in [None, Some("Climb the tallest tree".to_string())] {
            let mut page = story();
            page.story_text = long_text.clone();
            page.choice_info = choice.clone();
            let doc = compose_story_page(&png(60, 80), &page, &options()).unwrap();
            let info = inspect_pdf(&doc.bytes);
            assert_eq!(info.texts.len(), info.text_origins.len());

            // Everything except the two footer strings lives in the text area.
            let area_count = info.texts.len() - 2;
            for (text, &(_, y)) in info.texts.iter().zip(&info.text_origins).take(area_count) {
                assert!(
                    y >= layout.text_area.y - 1e-3 && y <= layout.text_area.top() + 1e-3,
                    "{text:?} at y={y} is outside the text area"
                );
            }
            for &(_, y) in &info.text_origins[area_count..] {
                assert!(y < layout.text_area.y && y > 0.0);
            }

            let body_end = if choice.is_some() { area_count - 1 } else { area_count };
            let last_body = &info.texts[body_end - 1];
            assert!(last_body.ends_with('\u{85}'), "last body line {last_body:?}");
            if choice.is_some() {
                assert_eq!(info.texts[area_count - 1], "Choice made: Climb the tallest tree");
            }
        }
    }

    #[test]
    fn short_story_is_not_truncated() {
        let doc = compose_story_page(&png(60, 80), &story(), &options()).unwrap();
        let info = inspect_pdf(&doc.bytes);
        assert!(!info.texts.iter().any(|t| t.ends_with('\u{85}')));
    }

    #[test]
    fn blank_choice_is_omitted() {
        let mut page = story();
        page.choice_info = Some("  ".into());
        let doc = compose_story_page(&png(60, 80), &page, &options()).unwrap();
        let info = inspect_pdf(&doc.bytes);
        assert!(!info.texts.iter().any(|t| t.starts_with("Choice made")));
    }

    #[test]
    fn episode_out_of_range_is_rejected() {
        let mut page = story();
        page.episode = 11;
        let err = compose_story_page(&png(10, 10), &page, &options()).unwrap_err();
        assert!(matches!(err, NormalizeError::InvalidOptions(_)));

        page.episode = 0;
        assert!(compose_story_page(&png(10, 10), &page, &options()).is_err());
    }

    #[test]
    fn undecodable_image_is_decode_error() {
        let err = compose_story_page(b"nope", &story(), &options()).unwrap_err();
        assert!(matches!(err, NormalizeError::Decode(_)));
    }

    #[test]
    fn footer_labels() {
        let mut page = story();
        page.age_level = AgeLevel::Age10Plus;
        assert_eq!(page.footer_left(), "Mia's Adventure \u{2022} Little Lines \u{2022} Age 10+");
        assert_eq!(page.footer_right(), "Page 3 of 10");
    }
}
