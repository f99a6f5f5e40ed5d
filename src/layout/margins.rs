/// Page margins in the document's user unit.
///
/// Text placed into a cell is offset by the left and top margin, so cell coordinates
/// are relative to the top-left corner of the page's content area. Nothing prevents
/// text from overflowing the margins.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: f32, right: f32, bottom: f32, left: f32) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all(value: f32) -> Margins {
        Margins::trbl(value, value, value, value)
    }

    /// Create margins where all values are 0.0
    pub fn empty() -> Margins {
        Margins::all(0.0)
    }

    /// The width left for content on a page of the given width
    pub fn content_width(&self, page_width: f32) -> f32 {
        page_width - self.left - self.right
    }
}
