//! The capabilities the text layout needs from its surroundings.
//!
//! Layout never talks to a concrete page or font directly: measuring goes through a
//! [WidthOracle], font selection through a [FontState], and drawing through a
//! [RenderSurface]. The crate ships [FontSession](crate::FontSession) and
//! [Page](crate::Page) as the PDF-backed implementations.

use crate::colour::Colour;
use crate::encoding::Encoding;
use crate::font::{FontFamily, FontStyle};
use crate::layout::Margins;
use crate::PDFError;

/// Reports how wide a string is once drawn with the currently active font, in the
/// document's user units. This is the single source of truth for whether a line fits.
pub trait WidthOracle {
    fn width_of(&self, text: &str) -> f32;
}

impl<W: WidthOracle + ?Sized> WidthOracle for &W {
    fn width_of(&self, text: &str) -> f32 {
        (**self).width_of(text)
    }
}

/// The font selection shared by everything drawn in one document session.
///
/// Selecting a font changes what [WidthOracle::width_of] reports, so measurements are
/// only valid for the font that was active when they were taken.
pub trait FontState: WidthOracle {
    /// Select the active font. `size` is in points.
    fn set_font(&mut self, family: FontFamily, style: FontStyle, size: f32)
        -> Result<(), PDFError>;

    /// The active family, style and size (in points)
    fn font(&self) -> (FontFamily, FontStyle, f32);

    fn set_colour(&mut self, colour: Colour);

    fn colour(&self) -> Colour;

    /// Points per user unit
    fn scale_factor(&self) -> f32;

    /// The code page the standard fonts are written with. Text in those fonts is
    /// translated to it before it is measured.
    fn encoding(&self) -> Encoding {
        Encoding::default()
    }
}

/// Something text can be painted onto at absolute coordinates.
///
/// Coordinates are in user units with the origin at the top-left corner of the page and
/// `y` pointing down to the text baseline.
pub trait RenderSurface {
    /// Draw `text` with its baseline starting at `(x, y)` using the font and colour
    /// that are active in `fonts`
    fn draw_text(&mut self, fonts: &dyn FontState, x: f32, y: f32, text: &str)
        -> Result<(), PDFError>;

    /// The page margins, in user units
    fn margins(&self) -> Margins;
}
