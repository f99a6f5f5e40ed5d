//! Rendering of recorded text spans into PDF content streams.

use crate::colour::Colour;
use crate::encoding::Encoding;
use crate::page::{SpanFont, SpanLayout};
use pdf_writer::{Content, Name, Str};

/// Renders text spans to a PDF content stream.
///
/// Font and colour operators are only emitted when they change from one span to the
/// next. Fonts are referenced by their PostScript name, which is also the name they
/// are registered under in the page's resources.
pub(crate) fn render_spans(spans: &[SpanLayout], encoding: Encoding) -> Vec<u8> {
    let mut content = Content::new();
    if spans.is_empty() {
        return content.finish();
    }

    content.save_state();

    let mut current_font: Option<SpanFont> = None;
    let mut current_colour: Option<Colour> = None;

    for span in spans.iter() {
        if current_colour != Some(span.colour) {
            span.colour.apply(&mut content);
            current_colour = Some(span.colour);
        }
        if current_font != Some(span.font) {
            content.set_font(Name(span.font.base_font_name().as_bytes()), span.font.size.0);
            current_font = Some(span.font);
        }

        let bytes = encoding.encode(&span.text);
        content.begin_text();
        content.next_line(span.coords.0 .0, span.coords.1 .0);
        content.show(Str(&bytes));
        content.end_text();
    }

    content.restore_state();
    content.finish()
}
