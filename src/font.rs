use crate::{PDFError, Pt};
use derive_more::Display;
use owned_ttf_parser::{AsFaceRef, OwnedFace};

/// The font families text can be set in. These are the standard PDF fonts, which every
/// viewer ships with, so documents never embed them. [FontFamily::Arial] is an alias
/// for Helvetica in the written file.
#[derive(Debug, Display, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FontFamily {
    #[default]
    Arial,
    Helvetica,
    Symbol,
    ZapBats,
    Courier,
    Times,
}

impl FontFamily {
    /// Whether text in this family must be translated into the document's code page before
    /// it is measured. Widths of these families are only correct on translated text.
    pub fn uses_code_page(&self) -> bool {
        matches!(
            self,
            FontFamily::Arial
                | FontFamily::Helvetica
                | FontFamily::Symbol
                | FontFamily::ZapBats
                | FontFamily::Courier
        )
    }

    /// The PostScript name of the standard font used for this family and style.
    /// Symbol and ZapfDingbats have no variants, so the style is ignored for them.
    pub fn base_font_name(&self, style: FontStyle) -> &'static str {
        use FontStyle::*;
        match (self, style) {
            (FontFamily::Arial | FontFamily::Helvetica, Normal) => "Helvetica",
            (FontFamily::Arial | FontFamily::Helvetica, Bold) => "Helvetica-Bold",
            (FontFamily::Arial | FontFamily::Helvetica, Italic) => "Helvetica-Oblique",
            (FontFamily::Arial | FontFamily::Helvetica, BoldItalic) => "Helvetica-BoldOblique",
            (FontFamily::Courier, Normal) => "Courier",
            (FontFamily::Courier, Bold) => "Courier-Bold",
            (FontFamily::Courier, Italic) => "Courier-Oblique",
            (FontFamily::Courier, BoldItalic) => "Courier-BoldOblique",
            (FontFamily::Times, Normal) => "Times-Roman",
            (FontFamily::Times, Bold) => "Times-Bold",
            (FontFamily::Times, Italic) => "Times-Italic",
            (FontFamily::Times, BoldItalic) => "Times-BoldItalic",
            (FontFamily::Symbol, _) => "Symbol",
            (FontFamily::ZapBats, _) => "ZapfDingbats",
        }
    }
}

/// Weight and slant of a font
#[derive(Debug, Display, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    pub const ALL: [FontStyle; 4] = [
        FontStyle::Normal,
        FontStyle::Bold,
        FontStyle::Italic,
        FontStyle::BoldItalic,
    ];
}

enum Metrics {
    /// Advance widths come from a parsed TrueType / OpenType face
    Face(OwnedFace),
    /// Every glyph has the same advance width
    FixedPitch {
        advance: u16,
        units_per_em: u16,
        ascender: i16,
        descender: i16,
    },
}

/// The glyph metrics of a font, used to measure how wide text will be once drawn.
///
/// The standard PDF fonts have no data in the file itself, so their widths have to
/// come from somewhere else: usually a metric-compatible TrueType face loaded with
/// [Font::load] (e.g. Liberation Sans for Arial / Helvetica). Courier is fixed-pitch and
/// is available out of the box through [Font::courier].
pub struct Font {
    metrics: Metrics,
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.metrics {
            Metrics::Face(_) => f.write_str("Font(face)"),
            Metrics::FixedPitch { advance, .. } => write!(f, "Font(fixed {advance})"),
        }
    }
}

impl Font {
    /// Load font metrics from raw TrueType / OpenType bytes, returning an error if the
    /// font could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, PDFError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        Ok(Font {
            metrics: Metrics::Face(face),
        })
    }

    /// Metrics for a fixed-pitch font where every glyph advances by `advance` font units
    pub fn fixed_pitch(advance: u16, units_per_em: u16) -> Font {
        Font {
            metrics: Metrics::FixedPitch {
                advance,
                units_per_em,
                ascender: (units_per_em as f32 * 0.8) as i16,
                descender: -((units_per_em as f32 * 0.2) as i16),
            },
        }
    }

    /// The metrics of the standard Courier font (all glyphs are 600/1000 em wide)
    pub fn courier() -> Font {
        Font {
            metrics: Metrics::FixedPitch {
                advance: 600,
                units_per_em: 1000,
                ascender: 629,
                descender: -157,
            },
        }
    }

    pub fn units_per_em(&self) -> u16 {
        match &self.metrics {
            Metrics::Face(face) => face.as_face_ref().units_per_em(),
            Metrics::FixedPitch { units_per_em, .. } => *units_per_em,
        }
    }

    /// The horizontal advance of a character in font units, or [None] if the font has
    /// no glyph for it
    pub fn advance(&self, ch: char) -> Option<u16> {
        match &self.metrics {
            Metrics::Face(face) => {
                let face = face.as_face_ref();
                face.glyph_index(ch)
                    .map(|gid| face.glyph_hor_advance(gid).unwrap_or_default())
            }
            Metrics::FixedPitch { advance, .. } => Some(*advance),
        }
    }

    /// Calculate the width of a given string of text at the given font size. Characters
    /// that have no glyph in the font do not contribute to the width.
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let scaling = size / self.units_per_em() as f32;
        text.chars()
            .filter_map(|ch| self.advance(ch))
            .map(|adv| scaling * adv as f32)
            .sum()
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        let ascender = match &self.metrics {
            Metrics::Face(face) => face.as_face_ref().ascender(),
            Metrics::FixedPitch { ascender, .. } => *ascender,
        };
        size / self.units_per_em() as f32 * ascender as f32
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: Pt) -> Pt {
        let descender = match &self.metrics {
            Metrics::Face(face) => face.as_face_ref().descender(),
            Metrics::FixedPitch { descender, .. } => *descender,
        };
        size / self.units_per_em() as f32 * descender as f32
    }

    /// Calculate the default line height of the font for the given size
    pub fn line_height(&self, size: Pt) -> Pt {
        let line_gap = match &self.metrics {
            Metrics::Face(face) => face.as_face_ref().line_gap(),
            Metrics::FixedPitch { .. } => 0,
        };
        let leading = size / self.units_per_em() as f32 * line_gap as f32;
        leading + self.ascent(size) - self.descent(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn courier_is_six_tenths_of_an_em() {
        let courier = Font::courier();
        assert_eq!(courier.width_of_text("abcde", Pt(10.0)), Pt(30.0));
        assert_eq!(courier.width_of_text("", Pt(10.0)), Pt(0.0));
    }

    #[test]
    fn fixed_pitch_line_height_spans_ascent_and_descent() {
        let font = Font::fixed_pitch(500, 1000);
        assert_eq!(font.ascent(Pt(10.0)), Pt(8.0));
        assert_eq!(font.descent(Pt(10.0)), Pt(-2.0));
        assert_eq!(font.line_height(Pt(10.0)), Pt(10.0));
    }

    #[test]
    fn garbage_bytes_do_not_parse() {
        assert!(matches!(
            Font::load(vec![0, 1, 2, 3]),
            Err(PDFError::FaceParsingError(_))
        ));
    }

    #[test]
    fn only_the_classic_families_use_code_pages() {
        assert!(FontFamily::Arial.uses_code_page());
        assert!(FontFamily::ZapBats.uses_code_page());
        assert!(!FontFamily::Times.uses_code_page());
    }

    #[test]
    fn arial_is_written_as_helvetica() {
        assert_eq!(
            FontFamily::Arial.base_font_name(FontStyle::BoldItalic),
            "Helvetica-BoldOblique"
        );
        assert_eq!(
            FontFamily::ZapBats.base_font_name(FontStyle::Bold),
            "ZapfDingbats"
        );
    }
}
