use crate::{
    config::DocumentConfig,
    encoding::Encoding,
    font::{Font, FontFamily, FontStyle},
    font_session::FontSession,
    info::Info,
    layout::{self, Cell, TextStyle},
    page::Page,
    refs::{ObjectReferences, RefType},
    PDFError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Name, Pdf, Ref};
use std::collections::{BTreeSet, HashMap};
use std::io::Write;

/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write].
///
/// Text is always added to the current page, which is the page most recently added
/// unless another one was selected with [Document::set_current_page].
pub struct Document {
    pub config: DocumentConfig,
    pub info: Option<Info>,
    pub fonts: FontSession,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    current_page: Option<Id<Page>>,
}

impl Default for Document {
    fn default() -> Self {
        Document::new(DocumentConfig::default())
    }
}

impl Document {
    pub fn new(config: DocumentConfig) -> Document {
        let fonts = FontSession::new(config.unit, config.encoding);
        Document {
            config,
            info: None,
            fonts,
            pages: Arena::new(),
            page_order: Vec::new(),
            current_page: None,
        }
    }

    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Register the metrics text in `family` / `style` is measured with. The PDF itself
    /// always uses the standard font of that family.
    pub fn register_font(&mut self, family: FontFamily, style: FontStyle, font: Font) -> Id<Font> {
        self.fonts.register(family, style, font)
    }

    /// Add an empty page using the document's page size and margins to the end of the
    /// document and make it the current page
    pub fn add_page(&mut self) -> Id<Page> {
        let page = Page::new(self.config.page_size, self.config.margins, self.config.unit);
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        self.current_page = Some(id);
        id
    }

    /// Make `page` the page text is added to
    pub fn set_current_page(&mut self, page: Id<Page>) {
        self.current_page = Some(page);
    }

    pub fn current_page(&self) -> Option<Id<Page>> {
        self.current_page
    }

    /// Get the 0-based index of a page given its ID
    pub fn index_of_page(&self, page: Id<Page>) -> Option<usize> {
        self.page_order.iter().position(|p| *p == page)
    }

    /// Draw wrapped text into a cell of the current page. Invalid style values are
    /// replaced as described in [TextStyle::make_valid].
    pub fn add_text(&mut self, text: &str, cell: Cell, style: &TextStyle) -> Result<(), PDFError> {
        let page = self
            .current_page
            .and_then(|id| self.pages.get_mut(id))
            .ok_or(PDFError::NoPage)?;
        layout::add_text(page, &mut self.fonts, text, cell, &style.make_valid())
    }

    /// The number of lines [Document::add_text] would draw for `text` in a cell
    /// `column_width` wide
    pub fn line_count(
        &mut self,
        text: &str,
        style: &TextStyle,
        column_width: f32,
    ) -> Result<usize, PDFError> {
        layout::line_count(&mut self.fonts, text, &style.make_valid(), column_width)
    }

    /// Write the entire document to the writer. The whole document is rendered in
    /// memory first.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), PDFError> {
        let Document {
            config,
            info,
            pages,
            page_order,
            ..
        } = self;

        let mut refs = ObjectReferences::new();
        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        let page_refs: Vec<Ref> = (0..page_order.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();
        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        // only the standard fonts that are actually drawn with are written
        let font_names: BTreeSet<&'static str> = page_order
            .iter()
            .filter_map(|id| pages.get(*id))
            .flat_map(|page| page.font_names())
            .collect();
        let mut font_refs: HashMap<&'static str, Ref> = HashMap::new();
        for (i, name) in font_names.into_iter().enumerate() {
            let id = refs.gen(RefType::Font(i));
            write_standard_font(&mut writer, id, name, config.encoding);
            font_refs.insert(name, id);
        }

        log::debug!(
            "writing {} pages using {} fonts",
            page_order.len(),
            font_refs.len()
        );
        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or(PDFError::MissingRef)?;
            page.write(
                &mut refs,
                page_index,
                &font_refs,
                config.encoding,
                config.compress,
                &mut writer,
            )?;
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}

fn write_standard_font(writer: &mut Pdf, id: Ref, name: &'static str, encoding: Encoding) {
    let mut font = writer.type1_font(id);
    font.base_font(Name(name.as_bytes()));

    // Symbol and ZapfDingbats come with their own encoding
    if matches!(name, "Symbol" | "ZapfDingbats") {
        return;
    }

    let differences = encoding.differences();
    if differences.is_empty() {
        font.encoding_predefined(Name(b"WinAnsiEncoding"));
    } else {
        let mut custom = font.encoding_custom();
        custom.base_encoding(Name(b"WinAnsiEncoding"));
        let mut diffs = custom.differences();
        for (byte, glyph) in differences {
            diffs.consecutive(*byte, [Name(glyph.as_bytes())]);
        }
    }
}
