//! Points on the normalized Mercator plane

use crate::point::{PlanarPoint, Point};

/// A point of the normalized Mercator plane.
///
/// Longitude -180..180 maps to `x` 0..1 and latitude maps through the
/// Mercator stretch to `y` 0..1 with the north at `y = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MercPoint {
    pub x: f64,
    pub y: f64,
}

impl MercPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Plain `(x, y)` point with the same coordinates
    pub fn to_point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Euclidean distance on the Mercator plane
    pub fn distance(&self, other: &MercPoint) -> f64 {
        self.to_point().distance(&other.to_point())
    }
}

impl PlanarPoint for MercPoint {
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

impl From<Point> for MercPoint {
    fn from(point: Point) -> Self {
        Self::new(point.x, point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merc_point_distance() {
        let p1 = MercPoint::new(0.1, 0.1);
        let p2 = MercPoint::new(0.4, 0.5);

        assert!((p1.distance(&p2) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_merc_point_from_point() {
        let point = MercPoint::from(Point::new(0.25, 0.75));

        assert!(point.is_equal(&MercPoint::new(0.25, 0.75)));
    }
}
