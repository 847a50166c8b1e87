//! Projection adapter between spherical and planar point forms

use crate::geo_point::GeoPoint;
use crate::merc_point::MercPoint;

/// Moves points between the sphere and the Mercator plane around grid math.
#[derive(Debug, Clone, Copy, Default)]
pub struct MercatorCorrector;

impl MercatorCorrector {
    pub fn new() -> Self {
        Self
    }

    /// Project a geographic point before planar geometry is applied to it
    pub fn correct_for_grid(&self, point: &GeoPoint) -> MercPoint {
        point.to_merc()
    }

    /// Bring a planar result back to the sphere, formatted into valid range
    pub fn correct_for_geo(&self, point: &MercPoint) -> GeoPoint {
        GeoPoint::from_merc(point).to_formatted()
    }

    /// Polygons pass through unchanged
    pub fn correct_poly(&self, poly: Vec<GeoPoint>) -> Vec<GeoPoint> {
        poly
    }
}
