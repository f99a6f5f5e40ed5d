use crate::encoding::Encoding;
use crate::font::FontFamily;
use std::borrow::Cow;

/// Prepare text for measuring in `family`.
///
/// The standard families that address their glyphs through a code page get their text
/// translated into `encoding` first; their widths are only meaningful for translated
/// text. Text for every other family is returned untouched. Normalizing twice gives the
/// same result as normalizing once.
pub fn normalize<'a>(text: &'a str, family: FontFamily, encoding: Encoding) -> Cow<'a, str> {
    if family.uses_code_page() {
        encoding.translate(text)
    } else {
        Cow::Borrowed(text)
    }
}
