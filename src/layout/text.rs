use super::normalize::normalize;
use super::place::place_lines;
use super::style::{Cell, TextStyle};
use super::wrap::break_lines;
use crate::surface::{FontState, RenderSurface};
use crate::PDFError;

/// Draw `text` into `cell`, wrapped at the cell's width and aligned according to `style`.
///
/// Selects the style's font in `fonts` (the selection stays active afterwards) and draws
/// in the style's colour. The colour that was active before is restored once all lines
/// are drawn, or as soon as a draw fails, in which case the surface's error is returned.
pub fn add_text<S, F>(
    surface: &mut S,
    fonts: &mut F,
    text: &str,
    cell: Cell,
    style: &TextStyle,
) -> Result<(), PDFError>
where
    S: RenderSurface + ?Sized,
    F: FontState,
{
    fonts.set_font(style.family, style.style, style.size)?;

    let original_colour = fonts.colour();
    fonts.set_colour(style.colour);

    let text = normalize(text, style.family, fonts.encoding());
    let lines = break_lines(&*fonts, &text, cell.width, style.extrapolate);
    let placed = place_lines(surface, &*fonts, &lines, cell, style);

    fonts.set_colour(original_colour);
    placed
}

/// The number of lines `text` occupies when drawn with `style` in a column
/// `column_width` wide, without drawing anything.
///
/// Like [add_text], this selects the style's font in `fonts`, since widths depend on it.
/// Use it to reserve vertical space before committing to drawing.
pub fn line_count<F: FontState>(
    fonts: &mut F,
    text: &str,
    style: &TextStyle,
    column_width: f32,
) -> Result<usize, PDFError> {
    fonts.set_font(style.family, style.style, style.size)?;

    let text = normalize(text, style.family, fonts.encoding());
    Ok(break_lines(&*fonts, &text, column_width, style.extrapolate).len())
}

/// The vertical space `line_count` lines take up when drawn with `style`, in user units
pub fn text_height(line_count: usize, style: &TextStyle, scale_factor: f32) -> f32 {
    let line_height = style.size / scale_factor;
    line_count as f32 * (line_height + style.vertical_padding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::{colours, Colour};
    use crate::encoding::Encoding;
    use crate::font::{FontFamily, FontStyle};
    use crate::layout::{Align, Margins};
    use crate::surface::WidthOracle;

    /// Font state where every character is `size / 10` user units wide
    struct FakeFonts {
        font: (FontFamily, FontStyle, f32),
        colour: Colour,
        scale_factor: f32,
        selections: usize,
    }

    impl FakeFonts {
        fn new(scale_factor: f32) -> FakeFonts {
            FakeFonts {
                font: (FontFamily::Courier, FontStyle::Normal, 10.0),
                colour: colours::BLACK,
                scale_factor,
                selections: 0,
            }
        }
    }

    impl WidthOracle for FakeFonts {
        fn width_of(&self, text: &str) -> f32 {
            text.chars().count() as f32 * self.font.2 / 10.0
        }
    }

    impl FontState for FakeFonts {
        fn set_font(
            &mut self,
            family: FontFamily,
            style: FontStyle,
            size: f32,
        ) -> Result<(), PDFError> {
            if family == FontFamily::Symbol {
                return Err(PDFError::FontNotRegistered { family, style });
            }
            self.selections += 1;
            self.font = (family, style, size);
            Ok(())
        }

        fn font(&self) -> (FontFamily, FontStyle, f32) {
            self.font
        }

        fn set_colour(&mut self, colour: Colour) {
            self.colour = colour;
        }

        fn colour(&self) -> Colour {
            self.colour
        }

        fn scale_factor(&self) -> f32 {
            self.scale_factor
        }

        fn encoding(&self) -> Encoding {
            Encoding::Cp1252
        }
    }

    #[derive(Debug, PartialEq)]
    struct Draw {
        x: f32,
        y: f32,
        text: String,
        colour: Colour,
    }

    #[derive(Default)]
    struct Recorder {
        margins: Margins,
        draws: Vec<Draw>,
        fail_at: Option<usize>,
    }

    impl RenderSurface for Recorder {
        fn draw_text(
            &mut self,
            fonts: &dyn FontState,
            x: f32,
            y: f32,
            text: &str,
        ) -> Result<(), PDFError> {
            if self.fail_at == Some(self.draws.len()) {
                return Err(std::io::Error::other("surface gone").into());
            }
            self.draws.push(Draw {
                x,
                y,
                text: text.to_string(),
                colour: fonts.colour(),
            });
            Ok(())
        }

        fn margins(&self) -> Margins {
            self.margins
        }
    }

    fn courier(size: f32) -> TextStyle {
        TextStyle::new(FontFamily::Courier, size)
    }

    #[test]
    fn lines_move_down_by_font_height_and_padding() {
        let mut surface = Recorder::default();
        let mut fonts = FakeFonts::new(1.0);
        let style = courier(10.0).vertical_padding(2.0);

        add_text(&mut surface, &mut fonts, "one\ntwo", Cell::new(0.0, 0.0, 100.0), &style)
            .expect("draws");

        let ys: Vec<f32> = surface.draws.iter().map(|d| d.y).collect();
        assert_eq!(ys, vec![10.0, 22.0]);
    }

    #[test]
    fn padding_accumulates_per_line() {
        let mut surface = Recorder::default();
        let mut fonts = FakeFonts::new(2.0);
        let style = courier(10.0).vertical_padding(1.0);

        add_text(&mut surface, &mut fonts, "a\nb\nc\nd", Cell::new(0.0, 3.0, 50.0), &style)
            .expect("draws");

        // font height is 10 / 2 = 5
        let ys: Vec<f32> = surface.draws.iter().map(|d| d.y).collect();
        assert_eq!(ys, vec![8.0, 14.0, 20.0, 26.0]);
    }

    #[test]
    fn right_alignment_uses_the_left_margin_and_full_slack() {
        let mut surface = Recorder {
            margins: Margins::trbl(7.0, 0.0, 0.0, 5.0),
            ..Recorder::default()
        };
        let mut fonts = FakeFonts::new(1.0);
        let style = courier(100.0).align(Align::Right);

        // three characters at size 100 measure 30 units
        add_text(&mut surface, &mut fonts, "abc", Cell::new(10.0, 0.0, 100.0), &style)
            .expect("draws");

        assert_eq!(
            surface.draws,
            vec![Draw {
                x: 85.0,
                y: 107.0,
                text: "abc".into(),
                colour: colours::BLACK,
            }]
        );
    }

    #[test]
    fn text_is_drawn_in_the_style_colour_and_the_old_colour_is_restored() {
        let mut surface = Recorder::default();
        let mut fonts = FakeFonts::new(1.0);
        fonts.set_colour(colours::BLUE);
        let style = courier(10.0).colour(colours::RED);

        add_text(&mut surface, &mut fonts, "x\ny", Cell::new(0.0, 0.0, 20.0), &style)
            .expect("draws");

        assert!(surface.draws.iter().all(|d| d.colour == colours::RED));
        assert_eq!(fonts.colour(), colours::BLUE);
        // the font selection is left active
        assert_eq!(fonts.font(), (FontFamily::Courier, FontStyle::Normal, 10.0));
    }

    #[test]
    fn surface_errors_propagate_after_restoring_the_colour() {
        let mut surface = Recorder {
            fail_at: Some(1),
            ..Recorder::default()
        };
        let mut fonts = FakeFonts::new(1.0);
        let style = courier(10.0).colour(colours::GREEN);

        let result = add_text(&mut surface, &mut fonts, "1\n2\n3", Cell::new(0.0, 0.0, 20.0), &style);

        assert!(matches!(result, Err(PDFError::Io(_))));
        assert_eq!(surface.draws.len(), 1);
        assert_eq!(fonts.colour(), colours::BLACK);
    }

    #[test]
    fn unknown_fonts_fail_before_anything_changes() {
        let mut surface = Recorder::default();
        let mut fonts = FakeFonts::new(1.0);
        let style = TextStyle::new(FontFamily::Symbol, 10.0).colour(colours::RED);

        let result = add_text(&mut surface, &mut fonts, "abc", Cell::new(0.0, 0.0, 20.0), &style);

        assert!(matches!(result, Err(PDFError::FontNotRegistered { .. })));
        assert!(surface.draws.is_empty());
        assert_eq!(fonts.colour(), colours::BLACK);
    }

    #[test]
    fn empty_text_draws_nothing() {
        let mut surface = Recorder::default();
        let mut fonts = FakeFonts::new(1.0);

        add_text(&mut surface, &mut fonts, "", Cell::new(0.0, 0.0, 20.0), &courier(10.0))
            .expect("nothing to draw");

        assert!(surface.draws.is_empty());
        assert_eq!(line_count(&mut fonts, "", &courier(10.0), 20.0).unwrap(), 0);
    }

    #[test]
    fn text_is_normalized_before_drawing() {
        let mut surface = Recorder::default();
        let mut fonts = FakeFonts::new(1.0);

        add_text(&mut surface, &mut fonts, "→ ok", Cell::new(0.0, 0.0, 100.0), &courier(10.0))
            .expect("draws");
        add_text(
            &mut surface,
            &mut fonts,
            "→ ok",
            Cell::new(0.0, 0.0, 100.0),
            &TextStyle::new(FontFamily::Times, 10.0),
        )
        .expect("draws");

        assert_eq!(surface.draws[0].text, ". ok");
        assert_eq!(surface.draws[1].text, "→ ok");
    }

    #[test]
    fn line_count_selects_the_font_it_measures_with() {
        let mut fonts = FakeFonts::new(1.0);
        // 19 units wide at size 10, 38 at size 20
        let text = "aaaa bbbb cccc dddd";

        let small = line_count(&mut fonts, text, &courier(10.0), 20.0).unwrap();
        let large = line_count(&mut fonts, text, &courier(20.0), 20.0).unwrap();

        assert_eq!(small, 1);
        assert_eq!(large, 3);
        assert_eq!(fonts.font().2, 20.0);
        assert_eq!(fonts.selections, 2);
    }

    #[test]
    fn line_count_matches_the_drawn_lines() {
        let text = format!("{}\n\n{}", lipsum::lipsum(80), lipsum::lipsum(45));
        for width in [9.0, 17.0, 40.0] {
            let mut surface = Recorder::default();
            let mut fonts = FakeFonts::new(1.0);
            let style = courier(10.0);

            let counted = line_count(&mut fonts, &text, &style, width).unwrap();
            add_text(&mut surface, &mut fonts, &text, Cell::new(0.0, 0.0, width), &style)
                .unwrap();

            let normalized = normalize(&text, style.family, Encoding::Cp1252);
            assert_eq!(counted, surface.draws.len());
            assert_eq!(counted, break_lines(&fonts, &normalized, width, false).len());
        }
    }

    #[test]
    fn extrapolated_text_has_one_line_per_source_line() {
        let mut fonts = FakeFonts::new(1.0);
        let text = "a rather long first line\nsecond\n\nfourth line here";
        let style = courier(10.0).extrapolate(true);

        assert_eq!(line_count(&mut fonts, text, &style, 1.0).unwrap(), 4);
    }

    #[test]
    fn text_height_counts_padding_for_every_line() {
        let style = courier(10.0).vertical_padding(1.5);
        assert_eq!(text_height(3, &style, 2.0), 19.5);
    }
}
