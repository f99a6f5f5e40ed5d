//! Wrapping and placing text inside cells.
//!
//! Text goes through the same pipeline whether it is drawn or only counted:
//!
//! 1. the style's font is selected in the [FontState](crate::FontState);
//! 2. [`normalize`] translates the text into the font's code page if the family needs it;
//! 3. [`break_lines`] wraps it greedily at the cell width;
//! 4. [`place_lines`] positions every line according to the alignment and draws it.
//!
//! [`add_text`] runs all four steps, [`line_count`] stops after the third.
//!
//! # Example
//!
//! ```
//! use pdf_textcell::layout::{Cell, TextStyle};
//! use pdf_textcell::{Document, DocumentConfig, FontFamily};
//!
//! let mut doc = Document::new(DocumentConfig::default());
//! doc.add_page();
//!
//! let style = TextStyle::new(FontFamily::Courier, 12.0);
//! let lines = doc.line_count("Hello, world!", &style, 20.0).expect("courier is built in");
//! assert_eq!(lines, 2);
//!
//! doc.add_text("Hello, world!", Cell::new(0.0, 0.0, 20.0), &style)
//!     .expect("can draw");
//! ```

mod margins;
mod normalize;
mod place;
mod style;
mod text;
mod wrap;

pub use margins::*;
pub use normalize::*;
pub use place::*;
pub use style::*;
pub use text::*;
pub use wrap::*;
