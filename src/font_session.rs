use crate::colour::Colour;
use crate::encoding::Encoding;
use crate::font::{Font, FontFamily, FontStyle};
use crate::surface::{FontState, WidthOracle};
use crate::units::{Pt, Unit};
use crate::PDFError;
use id_arena::{Arena, Id};
use std::collections::HashMap;

/// The fonts of one document and which of them is currently active.
///
/// Font metrics live in an arena and are looked up by `(family, style)`. Courier is
/// registered for every style when the session is created, every other family needs
/// metrics registered with [FontSession::register] before it can be selected.
///
/// A session is mutable state shared by every text operation of a document; it is
/// passed around by `&mut` so only one operation can use it at a time.
#[derive(Debug)]
pub struct FontSession {
    pub fonts: Arena<Font>,
    registry: HashMap<(FontFamily, FontStyle), Id<Font>>,
    family: FontFamily,
    style: FontStyle,
    size: f32,
    colour: Colour,
    unit: Unit,
    encoding: Encoding,
}

impl FontSession {
    /// Create a session measuring in the given user unit and translating text for
    /// the standard fonts into `encoding`
    pub fn new(unit: Unit, encoding: Encoding) -> FontSession {
        let mut session = FontSession {
            fonts: Arena::new(),
            registry: HashMap::new(),
            family: FontFamily::Courier,
            style: FontStyle::Normal,
            size: 10.0,
            colour: Colour::default(),
            unit,
            encoding,
        };

        let courier = session.fonts.alloc(Font::courier());
        for style in FontStyle::ALL {
            session.registry.insert((FontFamily::Courier, style), courier);
        }
        session
    }

    /// Register the metrics used to measure text in `family` / `style`, replacing any
    /// previously registered metrics
    pub fn register(&mut self, family: FontFamily, style: FontStyle, font: Font) -> Id<Font> {
        let id = self.fonts.alloc(font);
        self.registry.insert((family, style), id);
        id
    }

    /// Use the same metrics for every style of a family, e.g. for fixed-pitch fonts
    pub fn register_family(&mut self, family: FontFamily, font: Font) -> Id<Font> {
        let id = self.fonts.alloc(font);
        for style in FontStyle::ALL {
            self.registry.insert((family, style), id);
        }
        id
    }

    pub fn is_registered(&self, family: FontFamily, style: FontStyle) -> bool {
        self.registry.contains_key(&(family, style))
    }

    /// The metrics of the active font.
    ///
    /// Registrations are never removed, only added or replaced, and
    /// [FontState::set_font] only activates registered fonts, so the active font always
    /// has metrics. Pushing into the public `fonts` arena does not affect this.
    pub fn active(&self) -> &Font {
        let id = self.registry[&(self.family, self.style)];
        &self.fonts[id]
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// The height of one line of the active font in user units, i.e. its size
    /// divided by the scale factor
    pub fn font_height(&self) -> f32 {
        self.size / self.unit.scale_factor()
    }
}

impl Default for FontSession {
    fn default() -> Self {
        FontSession::new(Unit::default(), Encoding::default())
    }
}

impl WidthOracle for FontSession {
    fn width_of(&self, text: &str) -> f32 {
        self.unit
            .from_pt(self.active().width_of_text(text, Pt(self.size)))
    }
}

impl FontState for FontSession {
    fn set_font(
        &mut self,
        family: FontFamily,
        style: FontStyle,
        size: f32,
    ) -> Result<(), PDFError> {
        if !self.is_registered(family, style) {
            return Err(PDFError::FontNotRegistered { family, style });
        }
        if (family, style, size) != (self.family, self.style, self.size) {
            log::debug!("switching font to {family} {style} {size}pt");
        }
        self.family = family;
        self.style = style;
        self.size = size;
        Ok(())
    }

    fn font(&self) -> (FontFamily, FontStyle, f32) {
        (self.family, self.style, self.size)
    }

    fn set_colour(&mut self, colour: Colour) {
        self.colour = colour;
    }

    fn colour(&self) -> Colour {
        self.colour
    }

    fn scale_factor(&self) -> f32 {
        self.unit.scale_factor()
    }

    fn encoding(&self) -> Encoding {
        self.encoding
    }
}
