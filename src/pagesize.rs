//! Pre-defined page sizes for common paper formats.
//!
//! All sizes are provided in portrait orientation; use [PageSize::landscape] to turn
//! them sideways.
//!
//! ```
//! use pdf_textcell::pagesize::{A4, LETTER};
//!
//! let landscape = A4.landscape();
//! assert!(landscape.width > landscape.height);
//! assert_eq!(LETTER.portrait(), LETTER);
//! ```

use crate::units::*;

/// Page dimensions in points
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PageSize {
    pub width: Pt,
    pub height: Pt,
}

impl PageSize {
    /// A custom page size in millimetres
    pub fn from_mm(width: f32, height: f32) -> PageSize {
        PageSize {
            width: Mm(width).into(),
            height: Mm(height).into(),
        }
    }

    /// The size with the short side as width
    pub fn portrait(self) -> PageSize {
        if self.width <= self.height {
            self
        } else {
            PageSize {
                width: self.height,
                height: self.width,
            }
        }
    }

    /// The size with the long side as width
    pub fn landscape(self) -> PageSize {
        if self.width >= self.height {
            self
        } else {
            PageSize {
                width: self.height,
                height: self.width,
            }
        }
    }
}

pub const LETTER: PageSize = PageSize {
    width: Pt(8.5 * 72.0),
    height: Pt(11.0 * 72.0),
};
pub const LEGAL: PageSize = PageSize {
    width: Pt(8.5 * 72.0),
    height: Pt(14.0 * 72.0),
};

// iso a-series, converted from mm
pub const A3: PageSize = PageSize {
    width: Pt(297.0 * 72.0 / 25.4),
    height: Pt(420.0 * 72.0 / 25.4),
};
pub const A4: PageSize = PageSize {
    width: Pt(210.0 * 72.0 / 25.4),
    height: Pt(297.0 * 72.0 / 25.4),
};
pub const A5: PageSize = PageSize {
    width: Pt(148.0 * 72.0 / 25.4),
    height: Pt(210.0 * 72.0 / 25.4),
};
