//! Lines in implicit form `a·x + b·y = c`
//!
//! The algebra is written once, generic over the point representation.
//! `MercLine` is the same type instantiated for the Mercator plane.

use std::marker::PhantomData;

use crate::error::GeometryError;
use crate::merc_point::MercPoint;
use crate::point::{PlanarPoint, Point};

/// A line `a·x + b·y = c` over points of type `P`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<P = Point> {
    a: f64,
    b: f64,
    c: f64,
    point: PhantomData<fn() -> P>,
}

/// A line on the normalized Mercator plane
pub type MercLine = Line<MercPoint>;

impl<P: PlanarPoint> Line<P> {
    /// Create a line from its coefficients; `a` and `b` must not both be zero
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, GeometryError> {
        if a == 0.0 && b == 0.0 {
            return Err(GeometryError::DegenerateLine { a, b, c });
        }

        Ok(Self::from_coefficients(a, b, c))
    }

    fn from_coefficients(a: f64, b: f64, c: f64) -> Self {
        Self {
            a,
            b,
            c,
            point: PhantomData,
        }
    }

    /// The unique line through two distinct points
    pub fn from_two_points(point_a: P, point_b: P) -> Result<Self, GeometryError> {
        if point_a.is_equal(&point_b) {
            return Err(GeometryError::CoincidentPoints {
                x: point_a.x(),
                y: point_a.y(),
            });
        }

        let a = point_b.y() - point_a.y();
        let b = point_a.x() - point_b.x();
        let c = a * point_a.x() + b * point_a.y();

        Self::new(a, b, c)
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn is_parallel_to_axis_x(&self) -> bool {
        self.a == 0.0
    }

    pub fn is_parallel_to_axis_y(&self) -> bool {
        self.b == 0.0
    }

    /// Solve for `x`; `None` when the line is parallel to the x axis
    pub fn x_by_y(&self, y: f64) -> Option<f64> {
        if self.is_parallel_to_axis_x() {
            return None;
        }

        Some((self.c - self.b * y) / self.a)
    }

    /// Solve for `y`; `None` when the line is parallel to the y axis
    pub fn y_by_x(&self, x: f64) -> Option<f64> {
        if self.is_parallel_to_axis_y() {
            return None;
        }

        Some((self.c - self.a * x) / self.b)
    }

    /// Crossing point of two lines; `None` when they are parallel
    pub fn intersection_point(&self, other: &Line<P>) -> Option<P> {
        let det = self.a * other.b - other.a * self.b;
        if det == 0.0 {
            return None;
        }

        let x = (self.c * other.b - other.c * self.b) / det;
        let y = (self.a * other.c - other.a * self.c) / det;

        Some(P::from_xy(x, y))
    }

    /// The line through `point` perpendicular to this one
    pub fn perpendicular_by_point(&self, point: P) -> Line<P> {
        // Normal of the perpendicular is this line's direction (b, -a)
        let a = self.b;
        let b = -self.a;
        let c = a * point.x() + b * point.y();

        Self::from_coefficients(a, b, c)
    }

    /// Foot of the perpendicular dropped from `point`
    pub fn closest_to_point(&self, point: P) -> P {
        let t = self.signed_offset(point);

        P::from_xy(point.x() - t * self.a, point.y() - t * self.b)
    }

    /// Mirror image of `point` across the line
    pub fn calc_symmetrical_point(&self, point: P) -> P {
        let t = self.signed_offset(point);

        P::from_xy(point.x() - 2.0 * t * self.a, point.y() - 2.0 * t * self.b)
    }

    fn signed_offset(&self, point: P) -> f64 {
        (self.a * point.x() + self.b * point.y() - self.c) / (self.a * self.a + self.b * self.b)
    }
}

impl Line<MercPoint> {
    /// True when the point satisfies the line equation within tolerance
    pub fn has_point(&self, point: &MercPoint) -> bool {
        let solved = if self.is_parallel_to_axis_x() {
            self.y_by_x(point.x).map(|y| MercPoint::new(point.x, y))
        } else {
            self.x_by_y(point.y).map(|x| MercPoint::new(x, point.y))
        };

        solved.is_some_and(|solved| point.is_equal(&solved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_line_is_rejected() {
        let result = Line::<Point>::new(0.0, 0.0, 1.0);

        assert!(matches!(result, Err(GeometryError::DegenerateLine { .. })));
    }

    #[test]
    fn test_from_two_points_passes_through_both() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, -1.0);
        let line = Line::from_two_points(a, b).unwrap();

        assert_eq!(line.a() * a.x + line.b() * a.y, line.c());
        assert_eq!(line.a() * b.x + line.b() * b.y, line.c());
    }

    #[test]
    fn test_perpendicular_is_perpendicular() {
        let line = Line::<Point>::new(1.0, 3.0, 2.0).unwrap();
        let perpendicular = line.perpendicular_by_point(Point::new(5.0, 5.0));

        assert_eq!(line.a() * perpendicular.a() + line.b() * perpendicular.b(), 0.0);
    }

    #[test]
    fn test_closest_to_point_on_horizontal_line() {
        let line = Line::<Point>::new(0.0, 1.0, 2.0).unwrap();
        let foot = line.closest_to_point(Point::new(7.0, -3.0));

        assert!(foot.is_equal(&Point::new(7.0, 2.0)));
    }

    #[test]
    fn test_merc_line_has_point_when_axis_parallel() {
        let vertical = MercLine::new(1.0, 0.0, 0.5).unwrap();
        let horizontal = MercLine::new(0.0, 1.0, 0.25).unwrap();

        assert!(vertical.has_point(&MercPoint::new(0.5, 0.9)));
        assert!(!vertical.has_point(&MercPoint::new(0.6, 0.9)));
        assert!(horizontal.has_point(&MercPoint::new(0.1, 0.25)));
        assert!(!horizontal.has_point(&MercPoint::new(0.1, 0.3)));
    }
}
