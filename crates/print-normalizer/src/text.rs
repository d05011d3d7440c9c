//! Text measurement and wrapping for the standard PDF Helvetica faces.
//!
//! Advance widths come from the Adobe Helvetica AFM metrics (units of
//! 1/1000 em). Oblique shares the regular widths.

/// Standard Type1 fonts used on story pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Font {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
}

impl Font {
    pub fn base_font(self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
            Self::HelveticaOblique => "Helvetica-Oblique",
        }
    }

    /// Name of the font in the page resource dictionary.
    pub fn resource_name(self) -> &'static str {
        match self {
            Self::Helvetica => "F1",
            Self::HelveticaBold => "F2",
            Self::HelveticaOblique => "F3",
        }
    }

    fn widths(self) -> &'static [u16; 95] {
        match self {
            Self::Helvetica | Self::HelveticaOblique => &HELVETICA_WIDTHS,
            Self::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        }
    }

    /// Advance width of one WinAnsi byte in 1/1000 em.
    fn byte_width(self, byte: u8) -> u16 {
        match byte {
            0x20..=0x7E => self.widths()[usize::from(byte - 0x20)],
            0x85 | 0x97 => 1000, // ellipsis, em dash
            0x91 | 0x92 => 222,
            0x93 | 0x94 => 333,
            0x95 => 350, // bullet
            0x96 => 556, // en dash
            _ => 556,
        }
    }
}

/// ASCII 0x20..=0x7E, Helvetica.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

/// ASCII 0x20..=0x7E, Helvetica-Bold.
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // '0'..'?'
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 'P'..'_'
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // '`'..'o'
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 'p'..'~'
];

/// Encode `text` as WinAnsi bytes; unmappable characters become `?`.
pub fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            ' '..='~' => ch as u8,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{00A0}'..='\u{00FF}' => ch as u32 as u8,
            '\t' | '\n' | '\r' => b' ',
            _ => b'?',
        })
        .collect()
}

/// Width of `text` in points at `size`.
pub fn measure_text_width(font: Font, size: f64, text: &str) -> f64 {
    let units: u32 = to_win_ansi(text)
        .into_iter()
        .map(|b| u32::from(font.byte_width(b)))
        .sum();
    f64::from(units) * size / 1000.0
}

/// Wrap text to fit within `max_width` points.
///
/// Whitespace runs collapse to single spaces. A word wider than the line is
/// broken character by character.
pub fn wrap_text(font: Font, size: f64, text: &str, max_width: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        let candidate = if current_line.is_empty() {
            word.to_string()
        } else {
            format!("{current_line} {word}")
        };

        if measure_text_width(font, size, &candidate) <= max_width {
            current_line = candidate;
            continue;
        }

        if !current_line.is_empty() {
            lines.push(std::mem::take(&mut current_line));
        }

        if measure_text_width(font, size, word) <= max_width {
            current_line = word.to_string();
            continue;
        }

        // Force-break an over-long word.
        for ch in word.chars() {
            let mut next = current_line.clone();
            next.push(ch);
            if measure_text_width(font, size, &next) > max_width && !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
                current_line.push(ch);
            } else {
                current_line = next;
            }
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
}

/// Shorten `line` so that it ends in an ellipsis and fits `max_width`.
pub fn ellipsize(font: Font, size: f64, line: &str, max_width: f64) -> String {
    let mut kept = line.trim_end().to_string();
    loop {
        let candidate = format!("{kept}\u{2026}");
        if kept.is_empty() || measure_text_width(font, size, &candidate) <= max_width {
            return candidate;
        }
        kept.pop();
        let trimmed = kept.trim_end().len();
        kept.truncate(trimmed);
    }
}
