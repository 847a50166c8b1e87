//! Planar point shared by the geographic and Mercator point types

/// Tolerance for comparing planar coordinates
pub const PLANAR_EPSILON: f64 = 1e-12;

/// Decimal places kept by coordinate formatting
pub const FORMAT_PRECISION: u32 = 12;

/// Round a coordinate value to the given number of decimal places
pub(crate) fn round_coord_with_precision(value: f64, precision: u32) -> f64 {
    let factor = 10_f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// Anything that can be placed on a plane as an `(x, y)` pair.
///
/// The line algebra is written once against this trait and instantiated
/// for [`Point`], [`crate::MercPoint`] and [`crate::GeoPoint`].
pub trait PlanarPoint: Copy + std::fmt::Debug {
    fn x(&self) -> f64;

    fn y(&self) -> f64;

    fn from_xy(x: f64, y: f64) -> Self;

    /// Tolerance based equality
    fn is_equal(&self, other: &Self) -> bool {
        (self.x() - other.x()).abs() < PLANAR_EPSILON && (self.y() - other.y()).abs() < PLANAR_EPSILON
    }
}

/// A point on a plane
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl PlanarPoint for Point {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn from_xy(x: f64, y: f64) -> Self {
        Self::new(x, y)
    }
}
