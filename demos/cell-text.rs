use pdf_textcell::layout::{text_height, Align, Cell, TextStyle};
use pdf_textcell::{colours, pagesize, Document, DocumentConfig, FontFamily, FontState, Info};

fn main() {
    let mut doc = Document::new(DocumentConfig::default().page_size(pagesize::A4));
    doc.set_info(Info::new().title("Cell text").author("pdf-textcell"));
    doc.add_page();

    let column = doc.config.content_width() / 3.0;
    let text = lipsum::lipsum(60);

    let mut row_height: f32 = 0.0;
    for (i, align) in [Align::Left, Align::Center, Align::Right].into_iter().enumerate() {
        let style = TextStyle::new(FontFamily::Courier, 9.0)
            .align(align)
            .vertical_padding(1.0)
            .colour(if i == 1 { colours::BLUE } else { colours::BLACK });

        // the row is as tall as its tallest column
        let lines = doc
            .line_count(&text, &style, column)
            .expect("courier is built in");
        row_height = row_height.max(text_height(lines, &style, doc.fonts.scale_factor()));

        doc.add_text(&text, Cell::new(column * i as f32, 0.0, column), &style)
            .expect("can draw text");
    }

    let banner = TextStyle::new(FontFamily::Courier, 14.0).extrapolate(true);
    doc.add_text(
        "This heading is allowed to run past the edge of its narrow cell",
        Cell::new(0.0, row_height + 5.0, 20.0),
        &banner,
    )
    .expect("can draw text");

    let out = std::fs::File::create("cell-text.pdf").expect("can create file");
    doc.write(out).expect("can write document");
}
