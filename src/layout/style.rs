use crate::colour::Colour;
use crate::font::{FontFamily, FontStyle};

/// Font size used when a style has no usable size
pub const DEFAULT_FONT_SIZE: f32 = 10.0;

/// Horizontal alignment of each line within its cell
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// The region text is laid out into. `x` and `y` are the top-left corner relative to
/// the page margins, in user units; `width` is the column width lines wrap at.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Cell {
    pub x: f32,
    pub y: f32,
    pub width: f32,
}

impl Cell {
    pub fn new(x: f32, y: f32, width: f32) -> Cell {
        Cell { x, y, width }
    }
}

/// How a piece of text is set: font, colour, alignment and line spacing
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStyle {
    pub family: FontFamily,
    pub style: FontStyle,
    /// Font size in points
    pub size: f32,
    pub colour: Colour,
    pub align: Align,
    /// Extra space added below every line, in user units
    pub vertical_padding: f32,
    /// Disable wrapping: every source line is drawn as one line, even if it overflows
    pub extrapolate: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            family: FontFamily::Arial,
            style: FontStyle::Normal,
            size: DEFAULT_FONT_SIZE,
            colour: Colour::default(),
            align: Align::Left,
            vertical_padding: 0.0,
            extrapolate: false,
        }
    }
}

impl TextStyle {
    pub fn new(family: FontFamily, size: f32) -> TextStyle {
        TextStyle {
            family,
            size,
            ..TextStyle::default()
        }
    }

    pub fn style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    pub fn colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn vertical_padding(mut self, padding: f32) -> Self {
        self.vertical_padding = padding;
        self
    }

    pub fn extrapolate(mut self, extrapolate: bool) -> Self {
        self.extrapolate = extrapolate;
        self
    }

    /// Replace values that cannot be laid out: a size that is not positive falls back
    /// to [DEFAULT_FONT_SIZE] and negative padding is clamped to zero
    pub fn make_valid(mut self) -> Self {
        if self.size.is_nan() || self.size <= 0.0 {
            self.size = DEFAULT_FONT_SIZE;
        }
        if self.vertical_padding.is_nan() || self.vertical_padding < 0.0 {
            self.vertical_padding = 0.0;
        }
        self
    }
}
