use super::style::{Align, Cell, TextStyle};
use crate::surface::{FontState, RenderSurface};
use crate::PDFError;

/// The x coordinate a line starts at within its cell.
///
/// Centered lines get half of the unused column width to their left, right-aligned
/// lines get all of it.
pub fn line_x(align: Align, cell: Cell, line_width: f32, left_margin: f32) -> f32 {
    let x = cell.x + left_margin;
    let divisor = match align {
        Align::Left => return x,
        Align::Center => 2.0,
        Align::Right => 1.0,
    };
    x + (cell.width - line_width) / divisor
}

/// Draw already broken lines into a cell.
///
/// The first baseline sits one font height below the top of the cell and every
/// following line moves down by another font height plus `vertical_padding`. Line
/// widths and the font height are read from `fonts` as each line is drawn, so they
/// always reflect the active font.
pub fn place_lines<S, F>(
    surface: &mut S,
    fonts: &F,
    lines: &[String],
    cell: Cell,
    style: &TextStyle,
) -> Result<(), PDFError>
where
    S: RenderSurface + ?Sized,
    F: FontState,
{
    let margins = surface.margins();

    let (_, _, size) = fonts.font();
    let top = cell.y + size / fonts.scale_factor();

    let mut padding = 0.0;
    for (index, line) in lines.iter().enumerate() {
        let line_width = fonts.width_of(line);
        let (_, _, size) = fonts.font();
        let line_height = size / fonts.scale_factor();

        let x = line_x(style.align, cell, line_width, margins.left);
        let y = top + index as f32 * line_height + padding + margins.top;
        log::trace!("line {index} at ({x}, {y}): {line:?}");

        surface.draw_text(fonts, x, y, line)?;
        padding += style.vertical_padding;
    }

    Ok(())
}
