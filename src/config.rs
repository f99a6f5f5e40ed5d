use crate::encoding::Encoding;
use crate::layout::Margins;
use crate::pagesize::{PageSize, A4};
use crate::units::Unit;

/// Settings shared by every page of a [Document](crate::Document)
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentConfig {
    /// Size of new pages
    pub page_size: PageSize,
    /// The unit cells, margins and measured widths are expressed in
    pub unit: Unit,
    /// Margins of new pages, in `unit`
    pub margins: Margins,
    /// Code page text in the standard fonts is translated to
    pub encoding: Encoding,
    /// Deflate page content streams
    pub compress: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        DocumentConfig {
            page_size: A4,
            unit: Unit::Mm,
            margins: Margins::all(10.0),
            encoding: Encoding::Cp1252,
            compress: true,
        }
    }
}

impl DocumentConfig {
    pub fn page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Change the user unit. Margins are not converted, set them afterwards.
    pub fn unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    pub fn margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// The width available for content on a page, in user units
    pub fn content_width(&self) -> f32 {
        self.margins
            .content_width(self.unit.from_pt(self.page_size.width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize::LETTER;

    #[test]
    fn default_is_a4_in_millimetres() {
        let config = DocumentConfig::default();
        assert_eq!(config.unit, Unit::Mm);
        assert!((config.content_width() - 190.0).abs() < 1e-3);
    }

    #[test]
    fn builder_overrides_fields() {
        let config = DocumentConfig::default()
            .page_size(LETTER)
            .unit(Unit::In)
            .margins(Margins::all(0.5))
            .compress(false);
        assert!((config.content_width() - 7.5).abs() < 1e-5);
        assert!(!config.compress);
    }
}
