use arrayvec::ArrayVec;

use crate::center_point::{CenterPoint, MAX_CELL_VERTICES};
use crate::geo_point::GeoPoint;

/// The polygon surrounding one lattice center
///
/// Vertices run clockwise with north up. Edge `k` goes from vertex `k` to
/// vertex `k + 1` and faces the neighbour at `params().edge_offsets()[k]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    center: CenterPoint,
    points: ArrayVec<GeoPoint, MAX_CELL_VERTICES>,
}

impl Cell {
    pub fn new(center: CenterPoint, points: ArrayVec<GeoPoint, MAX_CELL_VERTICES>) -> Self {
        Self { center, points }
    }

    pub fn center(&self) -> &CenterPoint {
        &self.center
    }

    /// Ring vertices (not repeated at the end)
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Start and end vertex of edge `side`
    pub fn edge(&self, side: usize) -> (GeoPoint, GeoPoint) {
        let n = self.points.len();
        (self.points[side % n], self.points[(side + 1) % n])
    }

    /// The vertex of this cell equal to `point` within tolerance
    pub fn find_equal_geo_point(&self, point: &GeoPoint) -> Option<&GeoPoint> {
        self.points.iter().find(|vertex| vertex.is_equal(point))
    }

    /// Ring index of the vertex equal to `point`
    pub fn position_of(&self, point: &GeoPoint) -> Option<usize> {
        self.points.iter().position(|vertex| vertex.is_equal(point))
    }

    /// True when the other cell shares at least one vertex with this one
    pub fn is_neighbor(&self, other: &Cell) -> bool {
        if self.center.point().is_equal(&other.center.point()) {
            return false;
        }

        self.points.iter().any(|vertex| other.find_equal_geo_point(vertex).is_some())
    }

    /// Vertices shared with another cell, in this cell's ring order.
    ///
    /// For cells sharing an edge the result is that edge, oriented along
    /// this ring (wrapping past the last vertex when needed).
    pub fn common_points(&self, other: &Cell) -> Vec<GeoPoint> {
        let shared: Vec<usize> = (0..self.points.len())
            .filter(|&index| other.find_equal_geo_point(&self.points[index]).is_some())
            .collect();

        // An edge closing the ring shows up as [0, n - 1]
        if let [first, last] = shared[..] {
            if first == 0 && last == self.points.len() - 1 {
                return vec![self.points[last], self.points[first]];
            }
        }

        shared.into_iter().map(|index| self.points[index]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::center_point::{CellParams, CellShape};

    fn rect_center(lat: f64, lng: f64) -> CenterPoint {
        let params = CellParams::new(CellShape::Rect, true, 2.0, 2.0).unwrap();
        CenterPoint::new(GeoPoint::new(lat, lng), params)
    }

    #[test]
    fn test_find_equal_geo_point() {
        let cell = rect_center(0.0, 0.0).to_cell();

        assert!(cell.find_equal_geo_point(&GeoPoint::new(1.0, 1.0 + 1e-12)).is_some());
        assert!(cell.find_equal_geo_point(&GeoPoint::new(1.0, 1.1)).is_none());
        assert_eq!(cell.position_of(&GeoPoint::new(-1.0, -1.0)), Some(3));
    }

    #[test]
    fn test_is_neighbor() {
        let cell = rect_center(0.0, 0.0).to_cell();

        assert!(cell.is_neighbor(&rect_center(0.0, 2.0).to_cell()));
        assert!(cell.is_neighbor(&rect_center(2.0, 2.0).to_cell()));
        assert!(!cell.is_neighbor(&rect_center(0.0, 4.0).to_cell()));
        assert!(!cell.is_neighbor(&cell));
    }

    #[test]
    fn test_common_points_follow_own_ring() {
        let cell = rect_center(0.0, 0.0).to_cell();

        let east = cell.common_points(&rect_center(0.0, 2.0).to_cell());
        assert_eq!(east, vec![GeoPoint::new(1.0, 1.0), GeoPoint::new(-1.0, 1.0)]);

        // West edge runs from the last vertex back to the first
        let west = cell.common_points(&rect_center(0.0, -2.0).to_cell());
        assert_eq!(west, vec![GeoPoint::new(-1.0, -1.0), GeoPoint::new(1.0, -1.0)]);

        let corner = cell.common_points(&rect_center(2.0, 2.0).to_cell());
        assert_eq!(corner, vec![GeoPoint::new(1.0, 1.0)]);
    }
}
