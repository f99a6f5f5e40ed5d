use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign, Sum};

/// A length in PDF points (1/72 of an inch). All geometry that ends up in the PDF file
/// is expressed in points.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Sub, SubAssign, Sum, From,
    Into, Display,
)]
#[display("{_0}pt")]
pub struct Pt(pub f32);

/// A length in millimetres
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, From, Into, Display)]
#[display("{_0}mm")]
pub struct Mm(pub f32);

/// A length in inches
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, From, Into, Display)]
#[display("{_0}in")]
pub struct In(pub f32);

impl From<Mm> for Pt {
    fn from(v: Mm) -> Self {
        Pt(v.0 * 72.0 / 25.4)
    }
}

impl From<In> for Pt {
    fn from(v: In) -> Self {
        Pt(v.0 * 72.0)
    }
}

impl std::ops::Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl std::ops::Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

impl std::ops::Div<Pt> for Pt {
    type Output = f32;

    fn div(self, rhs: Pt) -> f32 {
        self.0 / rhs.0
    }
}

/// The user unit of a document. Cells, margins and text widths handed to the layout
/// functions are all expressed in this unit; the page converts them to points when
/// text is drawn.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Unit {
    /// PDF points
    Pt,
    /// Millimetres
    #[default]
    Mm,
    /// Centimetres
    Cm,
    /// Inches
    In,
}

impl Unit {
    /// The number of points in one user unit
    pub fn scale_factor(&self) -> f32 {
        match self {
            Unit::Pt => 1.0,
            Unit::Mm => 72.0 / 25.4,
            Unit::Cm => 72.0 / 2.54,
            Unit::In => 72.0,
        }
    }

    /// Convert a length given in this unit into points
    pub fn to_pt(&self, value: f32) -> Pt {
        Pt(value * self.scale_factor())
    }

    /// Convert a length given in points into this unit
    pub fn from_pt(&self, value: Pt) -> f32 {
        value.0 / self.scale_factor()
    }
}
