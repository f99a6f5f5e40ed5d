use crate::content::render_spans;
use crate::encoding::Encoding;
use crate::font::{FontFamily, FontStyle};
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::surface::{FontState, RenderSurface};
use crate::units::{Pt, Unit};
use crate::{Colour, PDFError};
use pdf_writer::{Filter, Finish, Name, Pdf, Ref};
use std::collections::HashMap;

/// The standard font and size a span is set in
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub family: FontFamily,
    pub style: FontStyle,
    pub size: Pt,
}

impl SpanFont {
    pub fn base_font_name(&self) -> &'static str {
        self.family.base_font_name(self.style)
    }
}

/// A run of text drawn at a fixed position on a page
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    /// Start of the baseline, in PDF page space (points from the bottom-left corner)
    pub coords: (Pt, Pt),
}

/// A page that records the text drawn onto it.
///
/// Text is drawn with top-left based coordinates in the document's user unit (see
/// [RenderSurface]) and stored in PDF page space, ready to be written.
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// Margins in user units, as handed to the layout
    pub margins: Margins,
    /// The laid out text
    pub spans: Vec<SpanLayout>,
}

impl Page {
    /// Create an empty page. `margins` are in `unit`.
    pub fn new(size: PageSize, margins: Margins, unit: Unit) -> Page {
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: size.width,
                y2: size.height,
            },
            content_box: Rect {
                x1: unit.to_pt(margins.left),
                y1: unit.to_pt(margins.bottom),
                x2: size.width - unit.to_pt(margins.right),
                y2: size.height - unit.to_pt(margins.top),
            },
            margins,
            spans: Vec::default(),
        }
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.spans.push(span);
    }

    /// The PostScript names of all fonts used on this page
    pub fn font_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.spans.iter().map(|span| span.font.base_font_name())
    }

    /// Render the page's content stream
    pub fn render(&self, encoding: Encoding) -> Vec<u8> {
        render_spans(&self.spans, encoding)
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        font_refs: &HashMap<&'static str, Ref>,
        encoding: Encoding,
        compress: bool,
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        let id = refs.get(RefType::Page(page_index)).ok_or(PDFError::MissingRef)?;
        let parent = refs.get(RefType::PageTree).ok_or(PDFError::MissingRef)?;
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(parent);
        page.contents(content_id);

        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        let mut names: Vec<&'static str> = self.font_names().collect();
        names.sort_unstable();
        names.dedup();
        for name in names {
            let font_ref = font_refs.get(name).copied().ok_or(PDFError::MissingRef)?;
            fonts.pair(Name(name.as_bytes()), font_ref);
        }
        fonts.finish();
        resources.finish();
        page.finish();

        let rendered = self.render(encoding);
        if compress {
            let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
                rendered.as_slice(),
                miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
            );
            writer
                .stream(content_id, compressed.as_slice())
                .filter(Filter::FlateDecode);
        } else {
            writer.stream(content_id, rendered.as_slice());
        }

        Ok(())
    }
}

impl RenderSurface for Page {
    fn draw_text(
        &mut self,
        fonts: &dyn FontState,
        x: f32,
        y: f32,
        text: &str,
    ) -> Result<(), PDFError> {
        let (family, style, size) = fonts.font();
        let k = fonts.scale_factor();
        let coords = (Pt(x * k), self.media_box.y2 - Pt(y * k));
        log::trace!("span {text:?} at {:?}", coords);

        self.add_span(SpanLayout {
            text: text.to_string(),
            font: SpanFont {
                family,
                style,
                size: Pt(size),
            },
            colour: fonts.colour(),
            coords,
        });
        Ok(())
    }

    fn margins(&self) -> Margins {
        self.margins
    }
}
