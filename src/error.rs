use crate::font::{FontFamily, FontStyle};
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error("no metrics are registered for font {family} ({style})")]
    /// A font was selected that has no face registered in the font session
    FontNotRegistered { family: FontFamily, style: FontStyle },

    #[error("the document has no page to draw on")]
    /// Text was added to a document before any page was added to it
    NoPage,

    #[error("object reference was not generated before use")]
    /// An object was written before the object it refers to was assigned an id
    MissingRef,
}
