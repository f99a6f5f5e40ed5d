//! Wrapped, aligned text in fixed-width cells of PDF documents.
//!
//! The heart of the crate is [layout]: it breaks text into the lines it occupies in a
//! column, counts them so space can be reserved, and places them into a cell according
//! to the text's alignment and spacing. Layout talks to fonts and pages only through
//! the traits in [surface], so it can run against anything that measures and draws text.
//!
//! [Document], [Page] and [FontSession] are the PDF implementations of those traits,
//! writing documents that use the standard (non-embedded) PDF fonts.

mod colour;
pub use colour::*;

mod config;
pub use config::*;

mod content;

mod document;
pub use document::*;

mod encoding;
pub use encoding::*;

mod font;
pub use font::*;

mod font_session;
pub use font_session::*;

mod info;
pub use info::*;

/// Utility functions and structures to lay out text in cells
pub mod layout;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

pub mod surface;
pub use surface::{FontState, RenderSurface, WidthOracle};

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
