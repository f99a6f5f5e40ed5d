//! Single-byte code pages used by the standard (non-embedded) PDF fonts.
//!
//! The classic base-14 fonts can only address 256 glyphs, so text has to be translated
//! from unicode into one of these code pages before it can be measured or drawn.
//! Characters that a code page cannot represent are replaced by `.`.
//!
//! Translated text stays a regular [`String`]: every character in it is one the code page
//! can represent, and [`Encoding::encode`] maps it to its byte when the page content is
//! written. Translating already translated text is a no-op.

use encoding_rs::{EncoderResult, ISO_8859_15, WINDOWS_1252};
use std::borrow::Cow;

/// Replacement for characters the code page has no byte for
pub const REPLACEMENT: char = '.';

/// The bytes where ISO-8859-15 differs from ISO-8859-1, along with the PostScript glyph
/// name used in a font's `/Differences` array
const ISO_8859_15_DIFFERENCES: [(u8, &str); 8] = [
    (0xA4, "Euro"),
    (0xA6, "Scaron"),
    (0xA8, "scaron"),
    (0xB4, "Zcaron"),
    (0xB8, "zcaron"),
    (0xBC, "OE"),
    (0xBD, "oe"),
    (0xBE, "Ydieresis"),
];

/// The code page text is translated to for the standard fonts
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Windows-1252, written as `WinAnsiEncoding`
    #[default]
    Cp1252,
    /// ISO-8859-15 (Latin-9), written as `WinAnsiEncoding` with differences
    Iso8859_15,
}

impl Encoding {
    fn code_page(&self) -> &'static encoding_rs::Encoding {
        match self {
            Encoding::Cp1252 => WINDOWS_1252,
            Encoding::Iso8859_15 => ISO_8859_15,
        }
    }

    /// Encode `text`, putting [REPLACEMENT] in place of every unmappable character.
    /// The flag is set if anything was replaced.
    fn encode_replacing(&self, text: &str) -> (Vec<u8>, bool) {
        let mut encoder = self.code_page().new_encoder();
        let mut bytes = Vec::with_capacity(text.len());
        let mut buffer = [0u8; 1024];
        let mut replaced = false;
        let mut src = text;

        loop {
            let (result, read, written) =
                encoder.encode_from_utf8_without_replacement(src, &mut buffer, true);
            bytes.extend_from_slice(&buffer[..written]);
            src = &src[read..];
            match result {
                EncoderResult::InputEmpty => break,
                EncoderResult::OutputFull => {}
                EncoderResult::Unmappable(_) => {
                    bytes.push(REPLACEMENT as u8);
                    replaced = true;
                }
            }
        }

        (bytes, replaced)
    }

    /// The byte this code page uses for `ch`, if any
    pub fn encode_char(&self, ch: char) -> Option<u8> {
        let mut utf8 = [0u8; 4];
        match self.encode_replacing(ch.encode_utf8(&mut utf8)) {
            (bytes, false) => bytes.first().copied(),
            _ => None,
        }
    }

    /// The character stored at `byte` in this code page
    pub fn decode_byte(&self, byte: u8) -> Option<char> {
        let bytes = [byte];
        let (text, _) = self.code_page().decode_without_bom_handling(&bytes);
        text.chars().next()
    }

    /// Translate unicode text into the characters this code page can represent, replacing
    /// everything else with [REPLACEMENT]. Text that is already representable is
    /// returned as-is without allocating.
    pub fn translate<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let (bytes, replaced) = self.encode_replacing(text);
        if !replaced {
            return Cow::Borrowed(text);
        }

        let (translated, _) = self.code_page().decode_without_bom_handling(&bytes);
        Cow::Owned(translated.into_owned())
    }

    /// Encode text into the bytes of this code page, for writing into a content stream
    pub fn encode(&self, text: &str) -> Vec<u8> {
        self.encode_replacing(text).0
    }

    /// Entries for a font's `/Differences` array on top of `WinAnsiEncoding`
    pub(crate) fn differences(&self) -> &'static [(u8, &'static str)] {
        match self {
            Encoding::Cp1252 => &[],
            Encoding::Iso8859_15 => &ISO_8859_15_DIFFERENCES,
        }
    }
}
