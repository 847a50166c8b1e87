//! Area assembly: cluster selection, outer ring, holes and GeoJSON export

use geojson::{Feature, Geometry, JsonObject, Value as GeoValue};
use rayon::prelude::*;

use crate::center_point::CenterPoint;
use crate::centers_matrix::CentersMatrix;
use crate::contour::ContourMatrix;
use crate::error::AreaError;
use crate::geo_point::{lng_diff, GeoPoint, PlainGeoPoint};
use crate::inner_centers_matrix::InnerCentersMatrix;
use crate::outer_centers_matrix::OuterCentersMatrix;

/// Default number of decimal places in exported GeoJSON coordinates
pub const DEFAULT_PRECISION: u32 = 6;

/// Closed rings of one area, oriented like RFC 7946 polygons
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AreaRings {
    /// Counter-clockwise outer ring; empty for an empty input
    pub outer: Vec<GeoPoint>,
    /// Clockwise hole rings
    pub holes: Vec<Vec<GeoPoint>>,
}

/// Shoelace sum with longitudes unwrapped along the ring; positive when counter-clockwise
fn signed_area(ring: &[GeoPoint]) -> f64 {
    let Some(first) = ring.first() else {
        return 0.0;
    };

    let mut lng = first.lng;
    let unwrapped: Vec<(f64, f64)> = ring
        .iter()
        .scan(*first, |prev, point| {
            lng += lng_diff(prev.lng, point.lng);
            *prev = *point;
            Some((lng, point.lat))
        })
        .collect();

    let n = unwrapped.len();
    (0..n)
        .map(|i| {
            let (x1, y1) = unwrapped[i];
            let (x2, y2) = unwrapped[(i + 1) % n];
            x1 * y2 - x2 * y1
        })
        .sum::<f64>()
        / 2.0
}

fn orient(mut ring: Vec<GeoPoint>, counter_clockwise: bool) -> Vec<GeoPoint> {
    if (signed_area(&ring) > 0.0) != counter_clockwise {
        ring.reverse();
    }
    ring
}

fn close(mut ring: Vec<GeoPoint>) -> Vec<GeoPoint> {
    let open = match (ring.first(), ring.last()) {
        (Some(first), Some(last)) if !first.is_equal(last) => Some(*first),
        _ => None,
    };
    if let Some(first) = open {
        ring.push(first);
    }
    ring
}

/// Trace the biggest connected cluster of `centers`.
///
/// No centers give empty rings and a single center gives its own cell.
pub fn build_area(centers: &[CenterPoint]) -> Result<AreaRings, AreaError> {
    match centers {
        [] => return Ok(AreaRings::default()),
        [center] => {
            let ring = close(center.to_cell().points().to_vec());
            return Ok(AreaRings {
                outer: orient(ring, true),
                holes: Vec::new(),
            });
        }
        _ => {}
    }

    let matrix = CentersMatrix::from_centers(centers)?;
    let biggest = matrix.biggest_set();
    let filtered = matrix.filter_by_set(&biggest)?;

    tracing::debug!(
        centers = centers.len(),
        cluster = biggest.len(),
        rows = filtered.rows(),
        cols = filtered.cols(),
        "Selected biggest cluster"
    );

    let outer = OuterCentersMatrix::from_centers_matrix(&filtered)?.to_poly()?;

    let holes = filtered
        .inner_empties()
        .iter()
        .map(|empties| {
            let ring = InnerCentersMatrix::from_centers_matrix(&filtered, empties)?.to_poly()?;
            Ok(orient(ring, false))
        })
        .collect::<Result<Vec<_>, AreaError>>()?;

    tracing::debug!(outer = outer.len(), holes = holes.len(), "Traced area rings");

    Ok(AreaRings {
        outer: orient(outer, true),
        holes,
    })
}

/// The boundary of a cluster of cells, with its holes and source centers
#[derive(Debug, Clone, PartialEq)]
pub struct Area {
    points: Vec<GeoPoint>,
    holes: Vec<Vec<GeoPoint>>,
    centers: Vec<CenterPoint>,
}

impl Area {
    pub fn from_cell_centers(centers: Vec<CenterPoint>) -> Result<Self, AreaError> {
        let AreaRings { outer, holes } = build_area(&centers)?;

        Ok(Self {
            points: outer,
            holes,
            centers,
        })
    }

    /// Closed outer ring
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Closed hole rings
    pub fn holes(&self) -> &[Vec<GeoPoint>] {
        &self.holes
    }

    /// Centers the area was built from, including ones outside the traced cluster
    pub fn centers(&self) -> &[CenterPoint] {
        &self.centers
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// GeoJSON `Polygon` geometry using [`DEFAULT_PRECISION`]
    pub fn to_geojson(&self) -> Geometry {
        self.to_geojson_with_precision(DEFAULT_PRECISION)
    }

    /// GeoJSON `Polygon` geometry, outer ring first, rounded to `precision` decimal places
    pub fn to_geojson_with_precision(&self, precision: u32) -> Geometry {
        let rings = std::iter::once(&self.points)
            .chain(self.holes.iter())
            .filter(|ring| !ring.is_empty())
            .map(|ring| {
                ring.iter()
                    .map(|point| point.to_position_with_precision(precision))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        Geometry::new(GeoValue::Polygon(rings))
    }

    /// GeoJSON feature with the source centers and hole count as properties
    pub fn to_feature(&self) -> Feature {
        let centers: Vec<PlainGeoPoint> = self.centers.iter().map(|center| center.point().to_plain()).collect();

        let mut properties = JsonObject::new();
        properties.insert("centers".to_string(), serde_json::json!(centers));
        properties.insert("holes".to_string(), serde_json::json!(self.holes.len()));

        Feature {
            bbox: None,
            geometry: Some(self.to_geojson()),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

/// Build one area per cluster in parallel, results in input order
pub fn build_areas_concurrent(clusters: &[Vec<CenterPoint>]) -> Vec<Result<Area, AreaError>> {
    clusters
        .par_iter()
        .map(|centers| Area::from_cell_centers(centers.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(lat: f64, lng: f64) -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(lat, lng),
            GeoPoint::new(lat, lng + 1.0),
            GeoPoint::new(lat - 1.0, lng + 1.0),
            GeoPoint::new(lat - 1.0, lng),
            GeoPoint::new(lat, lng),
        ]
    }

    #[test]
    fn test_signed_area_sign() {
        let clockwise = square(1.0, 0.0);
        assert!(signed_area(&clockwise) < 0.0);

        let mut counter_clockwise = clockwise;
        counter_clockwise.reverse();
        assert!(signed_area(&counter_clockwise) > 0.0);
    }

    #[test]
    fn test_signed_area_across_anti_meridian() {
        let ring = square(1.0, 179.5)
            .into_iter()
            .map(|point| GeoPoint::create_formatted(point.lat, point.lng))
            .collect::<Vec<_>>();

        assert!((signed_area(&ring) + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_orient_and_close() {
        let mut open = square(1.0, 0.0);
        open.pop();

        let ring = orient(close(open), true);
        assert_eq!(ring.len(), 5);
        assert_eq!(ring[0], ring[4]);
        assert!(signed_area(&ring) > 0.0);
    }

    #[test]
    fn test_empty_area_geojson() {
        let area = Area::from_cell_centers(Vec::new()).unwrap();

        assert!(area.is_empty());
        assert_eq!(area.to_geojson().value, GeoValue::Polygon(Vec::new()));
    }
}
